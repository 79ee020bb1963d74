use ordtree::Tree;

use std::collections::BTreeSet;

quickcheck::quickcheck! {
    fn ascending_regardless_of_insert_order(xs: Vec<i16>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let expected: Vec<_> = xs.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();

        tree.iter().copied().eq(expected.iter().copied())
            && tree.iter().rev().copied().eq(expected.iter().rev().copied())
            && tree.len() == expected.len()
    }
}

quickcheck::quickcheck! {
    fn reinserting_changes_nothing(xs: Vec<i16>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        let before: Vec<_> = tree.iter().copied().collect();

        let any_inserted = xs.iter().any(|x| tree.insert(*x));
        let after: Vec<_> = tree.iter().copied().collect();

        !any_inserted && before == after
    }
}

quickcheck::quickcheck! {
    fn find_is_end_iff_absent(xs: Vec<i8>, probes: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();

        probes.iter().chain(&xs).all(|probe| {
            let cursor = tree.find(probe);
            if xs.contains(probe) {
                cursor.key() == Ok(probe)
            } else {
                cursor == tree.end()
            }
        })
    }
}

quickcheck::quickcheck! {
    fn n_minus_one_advances_reach_the_last_key(xs: Vec<i16>) -> bool {
        let tree: Tree<_> = xs.into_iter().collect();
        if tree.is_empty() {
            return tree.begin() == tree.end();
        }

        let mut cursor = tree.begin();
        for _ in 1..tree.len() {
            cursor.advance();
        }
        let at_last = cursor.key().ok() == tree.last();
        cursor.advance();

        let mut from_end = tree.end();
        from_end.retreat();

        at_last && cursor == tree.end() && from_end.key().ok() == tree.last()
    }
}

quickcheck::quickcheck! {
    fn clone_is_independent(xs: Vec<i8>, more: Vec<i8>) -> bool {
        let original: Tree<_> = xs.iter().copied().collect();
        let mut copy = original.clone();
        copy.extend(more.iter().copied());

        let expected: BTreeSet<_> = xs.iter().chain(&more).copied().collect();

        original.iter().eq(xs.iter().collect::<BTreeSet<_>>())
            && copy.iter().eq(expected.iter())
    }
}
