use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use ordtree::Tree;

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: usize) -> usize {
    2usize.pow(num_levels as u32) - 1
}

/// Builds a tree by inserting keys in ascending order. Nothing rebalances so this is a linked
/// list in disguise.
fn get_unbalanced_tree(num_levels: usize) -> Tree<i32> {
    (0..).take(num_nodes_in_full_tree(num_levels)).collect()
}

/// Builds a tree by inserting keys so that the result has `num_levels` full levels.
fn get_balanced_tree(num_levels: usize) -> Tree<i32> {
    let xs = (0..)
        .take(num_nodes_in_full_tree(num_levels))
        .collect::<Vec<_>>();
    let mut tree = Tree::new();
    fill_balanced_tree(&mut tree, &xs);
    tree
}

/// Recursive helper for [`get_balanced_tree`].
fn fill_balanced_tree(tree: &mut Tree<i32>, xs: &[i32]) {
    if !xs.is_empty() {
        let mid = xs.len() / 2;
        tree.insert(xs[mid]);
        fill_balanced_tree(tree, &xs[..mid]);
        fill_balanced_tree(tree, &xs[mid + 1..]);
    }
}

/// Helper to bench a function on a BST.
/// It creates a group for the given name and closure and runs tests for various sizes and
/// shapes of BSTs before finishing the group.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut Tree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    // Degenerate trees get expensive to build quickly so stop at 2^11.
    for num_levels in [3, 7, 11] {
        let tree_tests = [
            ("unbalanced", get_unbalanced_tree(num_levels)),
            ("balanced", get_balanced_tree(num_levels)),
        ];
        for (name, tree) in tree_tests {
            let largest_key = *tree.last().expect("benchmark trees aren't empty");
            let id = BenchmarkId::new(name, largest_key);

            group.bench_function(id, |b| {
                b.iter_batched_ref(
                    || tree.clone(),
                    |tree| f(tree, black_box(largest_key)),
                    BatchSize::SmallInput,
                )
            });
        }
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "find", |tree, i| {
        let _cursor = black_box(tree.find(&i));
    });
    bench_helper(c, "find-miss", |tree, i| {
        let _cursor = black_box(tree.find(&(i + 1)));
    });
    bench_helper(c, "insert", |tree, i| {
        tree.insert(i + 1);
    });
    bench_helper(c, "insert-duplicate", |tree, i| {
        tree.insert(i);
    });
    bench_helper(c, "walk-forward", |tree, _| {
        let mut cursor = tree.begin();
        while !cursor.is_end() {
            black_box(cursor.key().ok());
            cursor.advance();
        }
    });
    bench_helper(c, "walk-backward", |tree, _| {
        for key in tree.iter().rev() {
            black_box(key);
        }
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
