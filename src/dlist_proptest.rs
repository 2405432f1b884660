#![cfg(test)]

// Property tests for DList kept inside the crate next to the unit tests
// for the cursor API.

use crate::dlist::{DList, Position, PositionError};
use proptest::prelude::*;
use std::collections::VecDeque;

// Operations address elements by index into the model; indices are taken
// modulo the current length so they shrink toward the front.
#[derive(Clone, Debug)]
enum Op {
    PushFront(i32),
    InsertAt(usize, i32),
    Append(i32),
    RemoveAt(usize),
    Mutate(usize, i32),
    WalkBack,
}

fn arb_ops() -> impl Strategy<Value = Vec<Op>> {
    let op = prop_oneof![
        any::<i32>().prop_map(Op::PushFront),
        (any::<usize>(), any::<i32>()).prop_map(|(i, v)| Op::InsertAt(i, v)),
        any::<i32>().prop_map(Op::Append),
        any::<usize>().prop_map(Op::RemoveAt),
        (any::<usize>(), any::<i32>()).prop_map(|(i, d)| Op::Mutate(i, d)),
        Just(Op::WalkBack),
    ];
    proptest::collection::vec(op, 1..80)
}

fn nth(l: &DList<i32>, i: usize) -> Position {
    let mut pos = l.first();
    for _ in 0..i {
        pos = l.next(pos);
    }
    pos
}

// Property: DList matches a VecDeque model across random sequences.
// - Cursor walks from `first` visit the model's elements in order.
// - `remove` returns the model's element and the position of its successor.
// - Positions of removed elements stay stale forever.
// - `len`/`is_empty` parity after every step.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_matches_vecdeque_model(ops in arb_ops()) {
        let mut sut: DList<i32> = DList::new();
        let mut model: VecDeque<i32> = VecDeque::new();
        let mut stale: Vec<Position> = Vec::new();

        for op in ops {
            match op {
                Op::PushFront(v) => {
                    let p = sut.push_front(v);
                    model.push_front(v);
                    prop_assert_eq!(p, sut.first());
                }
                Op::InsertAt(i, v) => {
                    let at = if model.is_empty() { 0 } else { i % (model.len() + 1) };
                    let pos = nth(&sut, at);
                    let p = sut.insert(v, pos).expect("live or end position");
                    model.insert(at, v);
                    prop_assert_eq!(sut.inspect(p), Some(&v));
                }
                Op::Append(v) => {
                    let p = sut.insert(v, Position::END).expect("end is always valid");
                    model.push_back(v);
                    prop_assert_eq!(p, sut.last());
                }
                Op::RemoveAt(i) => {
                    if model.is_empty() {
                        prop_assert!(sut.remove(sut.first()).is_none());
                    } else {
                        let at = i % model.len();
                        let pos = nth(&sut, at);
                        let (v, next) = sut.remove(pos).expect("live position");
                        prop_assert_eq!(Some(v), model.remove(at));
                        prop_assert_eq!(sut.inspect(next), model.get(at));
                        stale.push(pos);
                    }
                }
                Op::Mutate(i, d) => {
                    if !model.is_empty() {
                        let at = i % model.len();
                        let pos = nth(&sut, at);
                        let v = sut.inspect_mut(pos).expect("live position");
                        *v = v.wrapping_add(d);
                        model[at] = model[at].wrapping_add(d);
                    }
                }
                Op::WalkBack => {
                    let mut back = Vec::new();
                    let mut pos = sut.prev(Position::END);
                    while !sut.is_end(pos) {
                        back.push(*sut.inspect(pos).expect("walk stays on live nodes"));
                        pos = sut.prev(pos);
                    }
                    let expected: Vec<i32> = model.iter().rev().copied().collect();
                    prop_assert_eq!(back, expected);
                }
            }

            let walked: Vec<i32> = sut.iter().copied().collect();
            let expected: Vec<i32> = model.iter().copied().collect();
            prop_assert_eq!(walked, expected);
            for &p in &stale {
                prop_assert!(sut.inspect(p).is_none());
                prop_assert!(matches!(sut.insert(0, p), Err(PositionError::Stale)));
            }
            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
        }
    }
}
