//! Multi-threaded use of a shared scope
//!
//! Instance ids must stay unique when several threads construct from the
//! same class, and concurrent definitions under different names must all
//! land in the scope.

use std::collections::HashSet;
use std::thread;

use class_registry::{ClassLibrary, Members};
use core_types::Value;

const THREADS: usize = 8;
const PER_THREAD: usize = 250;

#[test]
fn test_concurrent_construction_keeps_ids_unique() {
    let library = ClassLibrary::new();
    let scope = library.initialize("Pool", false);
    let class = scope
        .define_class("Particle", Members::new().with("x:number", 0))
        .unwrap();

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let class = class.clone();
            thread::spawn(move || {
                (0..PER_THREAD)
                    .map(|i| {
                        let params = Value::object([("x", Value::from((t * PER_THREAD + i) as f64))]);
                        class.instantiate(params).unwrap().id().to_string()
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(ids.insert(id.clone()), "duplicate id {}", id);
        }
    }

    assert_eq!(ids.len(), THREADS * PER_THREAD);
    assert_eq!(class.instance_count(), (THREADS * PER_THREAD) as u64);
    for ordinal in 1..=THREADS * PER_THREAD {
        assert!(ids.contains(&format!("Particle_{}", ordinal)));
    }
}

#[test]
fn test_concurrent_definitions_are_not_lost() {
    let library = ClassLibrary::new();
    let scope = library.initialize("Pool", false);
    scope.define_namespace("shared").unwrap();

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let scope = scope.clone();
            thread::spawn(move || {
                scope.define_class(&format!("Class{}", t), Members::new()).unwrap();
                scope.define_namespace(&format!("shared.n{}", t)).unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    for t in 0..THREADS {
        assert!(scope.class(&format!("Class{}", t)).is_some());
    }
    assert_eq!(scope.namespace("shared").unwrap().len(), THREADS);
}
