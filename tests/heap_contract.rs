use indexed_heap::graph::{build_benchmark_graph, dijkstra};
use indexed_heap::{HeapConfig, HeapError, IndexedMinHeap};

fn drain(heap: &mut IndexedMinHeap) -> Vec<(i64, usize)> {
    let mut out = Vec::new();
    while let Some((key, id)) = heap.peek_min() {
        assert_eq!(heap.remove_min(), Ok(id));
        out.push((key, id));
    }
    out
}

#[test]
fn extraction_is_non_decreasing() {
    let keys = [7, -2, 7, 15, 0, 3, -9, 3, 11, 1];
    let mut heap = IndexedMinHeap::new(keys.len());
    for (id, &key) in keys.iter().enumerate() {
        heap.insert(key, id).unwrap();
    }

    let drained: Vec<i64> = drain(&mut heap).into_iter().map(|(k, _)| k).collect();
    let mut sorted = keys.to_vec();
    sorted.sort();
    assert_eq!(drained, sorted);
}

#[test]
fn positions_track_every_element() {
    let mut heap = IndexedMinHeap::new(32);
    for id in 0..32 {
        heap.insert(((id * 17) % 32) as i64, id).unwrap();
    }
    for id in (0..32).step_by(3) {
        heap.update(-(id as i64), id).unwrap();
    }
    for id in (1..32).step_by(5) {
        heap.remove(id).unwrap();
    }

    assert_eq!(heap.check_invariants(), Ok(()));
    for (slot, (_, id)) in heap.iter().enumerate() {
        assert_eq!(heap.position_of(id), Some(slot + 1));
    }
}

#[test]
fn sample_driver_sequence() {
    let mut heap = IndexedMinHeap::new(10);
    for i in 1..9 {
        heap.insert(i as i64, i).unwrap();
    }
    for id in [2, 5, 8] {
        assert_eq!(heap.remove(id), Ok(id));
    }

    let order: Vec<usize> = drain(&mut heap).into_iter().map(|(_, id)| id).collect();
    assert_eq!(order, vec![1, 3, 4, 6, 7]);
    assert_eq!(heap.remove_min(), Err(HeapError::EmptyHeap));
}

#[test]
fn configured_heap_behaves_like_plain_heap() {
    let mut heap = HeapConfig::with_capacity(4).trace(true).build();
    heap.insert(3, 0).unwrap();
    heap.insert(1, 1).unwrap();
    heap.update(0, 0).unwrap();
    assert_eq!(heap.peek_min(), Some((0, 0)));
    assert_eq!(
        heap.update(0, 3),
        Err(HeapError::UnknownElement { id: 3 })
    );
}

#[test]
fn shortest_path_on_benchmark_graph() {
    let graph = build_benchmark_graph();
    let path = dijkstra(&graph, 0, 4).unwrap().unwrap();
    assert_eq!(path.cost, 7);
    assert_eq!(path.nodes, vec![0, 1, 3, 4]);
}
