#[macro_use]
extern crate quickcheck;

use graph_forest::ForestDisjointSets;
use quickcheck::{Arbitrary, Gen};
use std::collections::HashSet;

// The number of elements in the forest we'll test on.
const FOREST_LEN: usize = 40;

// The percentage of commands that should be finds; the rest are unions.
const FIND_PCT: usize = 60;

// The maximum length of each generated script.
const MAX_SCRIPT_LEN: usize = 150;

quickcheck! {
    fn prop_forest_simulates_labelling(script: Script) -> bool {
        let mut tester = Tester::new();
        tester.execute(&script);
        tester.check()
    }

    fn prop_find_is_idempotent(script: Script) -> bool {
        let mut tester = Tester::new();
        tester.execute(&script);
        (0 .. FOREST_LEN).all(|i| {
            let first = *tester.forest.find_set(&i).unwrap();
            let second = *tester.forest.find_set(&i).unwrap();
            first == second && tester.forest.find_set(&first) == Ok(&first)
        })
    }
}

// We run the same operations on a `ForestDisjointSets` and on a naive
// labelling, where every element carries the id of its set and a union
// relabels one side, and then check that the two agree.
struct Tester {
    forest: ForestDisjointSets<usize>,
    labels: Vec<usize>,
}

impl Tester {
    fn new() -> Self {
        let mut forest = ForestDisjointSets::with_capacity(FOREST_LEN);
        for i in 0 .. FOREST_LEN {
            forest.make_set(i).unwrap();
        }

        Tester {
            forest,
            labels: (0 .. FOREST_LEN).collect(),
        }
    }

    fn execute(&mut self, script: &Script) {
        for cmd in &script.0 {
            match *cmd {
                Cmd::Union(i, j) => {
                    let changed = self.forest.union(&i, &j).unwrap();
                    assert_eq!(changed, self.labels[i] != self.labels[j]);
                    self.relabel(i, j);
                }
                Cmd::Find(i) => { self.forest.find_set(&i).unwrap(); }
            }
        }
    }

    fn relabel(&mut self, i: usize, j: usize) {
        let from = self.labels[i];
        let to = self.labels[j];
        for label in &mut self.labels {
            if *label == from {
                *label = to;
            }
        }
    }

    fn check(&self) -> bool {
        let distinct: HashSet<usize> = self.labels.iter().cloned().collect();
        if self.forest.set_count() != distinct.len()
            || self.forest.current_representatives().len() != distinct.len() {
            return false;
        }

        for i in 0 .. FOREST_LEN {
            for j in 0 .. FOREST_LEN {
                let same = self.labels[i] == self.labels[j];
                if self.forest.equiv(&i, &j) != Ok(same) {
                    return false;
                }
            }

            let members: HashSet<usize> = (0 .. FOREST_LEN)
                .filter(|&j| self.labels[j] == self.labels[i])
                .collect();
            if self.forest.current_elements_of_set_containing(&i) != Ok(members) {
                return false;
            }
        }

        true
    }
}

// A script is a sequence of commands.
#[derive(Clone, Debug)]
struct Script(Vec<Cmd>);

// A command is either a union or a find.
#[derive(Clone, Debug)]
enum Cmd {
    Union(usize, usize),
    Find(usize),
}

impl Arbitrary for Script {
    fn arbitrary<G: Gen>(g: &mut G) -> Self {
        let len = usize::arbitrary(g) % MAX_SCRIPT_LEN;
        Script((0 .. len).map(|_| Cmd::arbitrary(g)).collect())
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(Script))
    }
}

impl Arbitrary for Cmd {
    fn arbitrary<G: Gen>(g: &mut G) -> Self {
        let choice = usize::arbitrary(g) % 100;
        let mut gen_index = || usize::arbitrary(g) % FOREST_LEN;

        if choice < FIND_PCT {
            Cmd::Find(gen_index())
        } else {
            Cmd::Union(gen_index(), gen_index())
        }
    }
}
