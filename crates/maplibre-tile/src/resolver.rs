//! The lazy coordinates resolver.
//!
//! Mediates every coordinate access of one feature table. Sparse lookups
//! decode single features; once the access pattern looks like a scan — or
//! the underlying vector cannot decode features in isolation — the whole
//! vector is materialized once and every later access is served from it.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use mlt_vector::{Coordinates, GeometryVector};

use crate::{DecodeError, Result};

/// Largest forward index step still counted as sequential.
const MAX_INDEX_DELTA_FOR_SEQUENTIAL: usize = 2;
/// Consecutive near-sequential accesses after which the scan wins.
const NEAR_SEQUENTIAL_THRESHOLD: u32 = 32;
/// Total accesses after which bulk decoding wins regardless of pattern.
const ABSOLUTE_ACCESS_THRESHOLD: u32 = 512;

/// Decode counters, exposed for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolverStats {
    pub single_decodes: u32,
    pub bulk_decodes: u32,
}

#[derive(Debug, Default)]
pub struct CoordinatesResolver {
    materialized: RefCell<Option<Vec<Rc<Coordinates>>>>,
    last_index: Cell<Option<usize>>,
    near_sequential: Cell<u32>,
    total_accesses: Cell<u32>,
    stats: Cell<ResolverStats>,
}

impl CoordinatesResolver {
    /// Resolves the coordinates of feature `index` from `vector`.
    pub fn coordinates(&self, vector: &GeometryVector, index: usize) -> Result<Rc<Coordinates>> {
        if let Some(all) = self.materialized.borrow().as_ref() {
            return all
                .get(index)
                .cloned()
                .ok_or(DecodeError::OutOfRange { index, len: all.len() });
        }

        self.track(index);
        let scanning = self.near_sequential.get() >= NEAR_SEQUENTIAL_THRESHOLD
            || self.total_accesses.get() >= ABSOLUTE_ACCESS_THRESHOLD;
        if scanning || !vector.supports_single_decode() {
            return self.materialize(vector, index);
        }

        let mut stats = self.stats.get();
        stats.single_decodes += 1;
        self.stats.set(stats);
        Ok(Rc::new(vector.geometry(index)?))
    }

    pub fn stats(&self) -> ResolverStats {
        self.stats.get()
    }

    fn track(&self, index: usize) {
        self.total_accesses.set(self.total_accesses.get() + 1);
        if let Some(last) = self.last_index.get() {
            let sequential = index > last && index - last <= MAX_INDEX_DELTA_FOR_SEQUENTIAL;
            if sequential {
                self.near_sequential.set(self.near_sequential.get() + 1);
            } else {
                self.near_sequential.set(0);
            }
        }
        self.last_index.set(Some(index));
    }

    fn materialize(&self, vector: &GeometryVector, index: usize) -> Result<Rc<Coordinates>> {
        let all: Vec<Rc<Coordinates>> = vector.geometries()?.into_iter().map(Rc::new).collect();
        let mut stats = self.stats.get();
        stats.bulk_decodes += 1;
        self.stats.set(stats);
        log::debug!("materialized {} geometries after {} accesses", all.len(), self.total_accesses.get());

        let result = all
            .get(index)
            .cloned()
            .ok_or(DecodeError::OutOfRange { index, len: all.len() });
        *self.materialized.borrow_mut() = Some(all);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mlt_vector::{
        FlatGeometryVector, GeometryType, GeometryTypes, GpuGeometryVector, Topology, VertexBuffer,
    };

    fn point_vector(count: usize) -> GeometryVector {
        let data = (0..count as i32).flat_map(|i| [i, -i]).collect();
        GeometryVector::Flat(FlatGeometryVector::new(
            GeometryTypes::single(GeometryType::Point, count),
            Topology::default(),
            VertexBuffer::vec2(data),
        ))
    }

    #[test]
    fn sequential_scan_materializes_once() {
        let vector = point_vector(100);
        let resolver = CoordinatesResolver::default();
        for index in 0..36 {
            resolver.coordinates(&vector, index).unwrap();
        }
        let stats = resolver.stats();
        assert_eq!(stats.bulk_decodes, 1);
        // the first 32 accesses decode singly; the 33rd crosses the threshold
        assert_eq!(stats.single_decodes, 32);
        // further accesses never decode again
        resolver.coordinates(&vector, 99).unwrap();
        assert_eq!(resolver.stats(), stats);
    }

    #[test]
    fn sparse_access_stays_single() {
        let vector = point_vector(100);
        let resolver = CoordinatesResolver::default();
        for index in [0, 50, 99] {
            resolver.coordinates(&vector, index).unwrap();
        }
        let stats = resolver.stats();
        assert_eq!(stats.single_decodes, 3);
        assert_eq!(stats.bulk_decodes, 0);
    }

    #[test]
    fn jump_resets_the_sequential_counter() {
        let vector = point_vector(100);
        let resolver = CoordinatesResolver::default();
        for round in 0..4 {
            // 20 near-sequential accesses, then a backwards jump
            for step in 0..20 {
                resolver.coordinates(&vector, round + step).unwrap();
            }
        }
        assert_eq!(resolver.stats().bulk_decodes, 0);
        assert_eq!(resolver.stats().single_decodes, 80);
    }

    #[test]
    fn delta_of_two_counts_as_sequential() {
        let vector = point_vector(100);
        let resolver = CoordinatesResolver::default();
        let mut index = 0;
        for _ in 0..33 {
            resolver.coordinates(&vector, index).unwrap();
            index += 2;
        }
        assert_eq!(resolver.stats().bulk_decodes, 1);
    }

    #[test]
    fn absolute_threshold_triggers_bulk() {
        let vector = point_vector(4);
        let resolver = CoordinatesResolver::default();
        // alternate between two far-apart indices so the sequential counter
        // never accumulates
        for access in 0..512 {
            resolver.coordinates(&vector, (access % 2) * 3).unwrap();
        }
        let stats = resolver.stats();
        assert_eq!(stats.bulk_decodes, 1);
        assert_eq!(stats.single_decodes, 511);
    }

    #[test]
    fn gpu_vector_materializes_immediately() {
        let gpu = GpuGeometryVector::new(
            GeometryTypes::single(GeometryType::Polygon, 1),
            vec![0, 1],
            vec![0, 1, 2],
            vec![0, 0, 10, 0, 0, 10],
        );
        let vector = GeometryVector::Gpu(gpu);
        let resolver = CoordinatesResolver::default();
        resolver.coordinates(&vector, 0).unwrap();
        let stats = resolver.stats();
        assert_eq!(stats.bulk_decodes, 1);
        assert_eq!(stats.single_decodes, 0);
    }

    #[test]
    fn materialized_cache_returns_the_same_object() {
        let vector = point_vector(8);
        let resolver = CoordinatesResolver::default();
        let first = resolver.coordinates(&vector, 1).unwrap();
        // separate single decodes allocate separately
        let second = resolver.coordinates(&vector, 1).unwrap();
        assert!(!Rc::ptr_eq(&first, &second));

        let scanned = point_vector(40);
        let resolver = CoordinatesResolver::default();
        for index in 0..35 {
            resolver.coordinates(&scanned, index).unwrap();
        }
        assert_eq!(resolver.stats().bulk_decodes, 1);
        let a = resolver.coordinates(&scanned, 2).unwrap();
        let b = resolver.coordinates(&scanned, 2).unwrap();
        assert!(Rc::ptr_eq(&a, &b));
    }
}
