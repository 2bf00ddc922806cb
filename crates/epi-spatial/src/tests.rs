//! Unit tests for epi-spatial.

#[cfg(test)]
mod grid {
    use epi_core::{Cell, SimRng};

    use crate::{Grid, SpatialError};

    #[test]
    fn zero_dimension_rejected() {
        assert!(matches!(
            Grid::new(0, 5, true),
            Err(SpatialError::InvalidDimensions { width: 0, height: 5 })
        ));
    }

    #[test]
    fn index_roundtrip() {
        let g = Grid::new(7, 3, false).unwrap();
        for cell in g.cells() {
            assert_eq!(g.cell_at(g.cell_index(cell)), cell);
        }
        assert_eq!(g.cells().count(), 21);
    }

    #[test]
    fn interior_has_eight_neighbors() {
        let g = Grid::new(5, 5, false).unwrap();
        let n = g.neighborhood(Cell::new(2, 2));
        assert_eq!(n.len(), 8);
        assert!(!n.contains(&Cell::new(2, 2)));
    }

    #[test]
    fn bounded_corner_is_clipped() {
        let g = Grid::new(5, 5, false).unwrap();
        let n = g.neighborhood(Cell::new(0, 0));
        assert_eq!(n, vec![Cell::new(0, 1), Cell::new(1, 0), Cell::new(1, 1)]);
    }

    #[test]
    fn toroidal_corner_wraps() {
        let g = Grid::new(5, 5, true).unwrap();
        assert!(g.is_toroidal());
        let n = g.neighborhood(Cell::new(0, 0));
        assert_eq!(n.len(), 8);
        assert!(n.contains(&Cell::new(4, 4)));
        assert!(n.contains(&Cell::new(4, 0)));
        assert!(n.contains(&Cell::new(0, 4)));
    }

    #[test]
    fn degenerate_toroidal_grid_deduplicates() {
        // On a 2-wide torus, x-1 and x+1 are the same column.
        let g = Grid::new(2, 2, true).unwrap();
        let n = g.neighborhood(Cell::new(0, 0));
        assert_eq!(n, vec![Cell::new(0, 1), Cell::new(1, 0), Cell::new(1, 1)]);

        let single = Grid::new(1, 1, true).unwrap();
        assert!(single.neighborhood(Cell::new(0, 0)).is_empty());
    }

    #[test]
    fn random_neighbor_is_adjacent() {
        let g = Grid::new(6, 6, true).unwrap();
        let mut rng = SimRng::new(4);
        let from = Cell::new(3, 3);
        for _ in 0..50 {
            let to = g.random_neighbor(from, &mut rng);
            assert!(g.neighborhood(from).contains(&to));
        }
    }

    #[test]
    fn random_neighbor_on_single_cell_stays() {
        let g = Grid::new(1, 1, false).unwrap();
        let mut rng = SimRng::new(0);
        assert_eq!(g.random_neighbor(Cell::new(0, 0), &mut rng), Cell::new(0, 0));
    }

    #[test]
    fn random_cell_in_bounds() {
        let g = Grid::new(4, 9, false).unwrap();
        let mut rng = SimRng::new(11);
        for _ in 0..200 {
            assert!(g.contains(g.random_cell(&mut rng)));
        }
    }
}

#[cfg(test)]
mod district {
    use epi_core::{Cell, DistrictId};

    use crate::{DistrictMap, Grid, SpatialError};

    #[test]
    fn partition_is_total_and_disjoint() {
        for (width, n) in [(10, 1), (10, 3), (10, 10), (7, 4), (12, 5)] {
            let g = Grid::new(width, 4, true).unwrap();
            let map = DistrictMap::new(&g, n).unwrap();
            assert_eq!(map.len(), n as usize);

            let mut seen = vec![0u32; g.cell_count()];
            for d in map.iter() {
                for cell in map.cells_of(d.id) {
                    seen[g.cell_index(cell)] += 1;
                    assert_eq!(map.district_of(cell), d.id);
                }
            }
            assert!(seen.iter().all(|&c| c == 1), "width {width}, {n} districts");
        }
    }

    #[test]
    fn remainder_goes_to_first_districts() {
        let g = Grid::new(10, 2, false).unwrap();
        let map = DistrictMap::new(&g, 3).unwrap();
        let widths: Vec<u32> = map.iter().map(|d| d.width()).collect();
        assert_eq!(widths, vec![4, 3, 3]);
        assert_eq!(map.get(DistrictId(1)).columns, 4..7);
        assert_eq!(map.district_of(Cell::new(9, 1)), DistrictId(2));
        assert_eq!(map.cell_count(DistrictId(0)), 8);
    }

    #[test]
    fn too_many_districts_rejected() {
        let g = Grid::new(4, 4, true).unwrap();
        assert!(matches!(
            DistrictMap::new(&g, 5),
            Err(SpatialError::DistrictCount { districts: 5, width: 4 })
        ));
        assert!(DistrictMap::new(&g, 0).is_err());
    }

    #[test]
    fn districts_start_unenforced() {
        let g = Grid::new(6, 6, true).unwrap();
        let mut map = DistrictMap::new(&g, 2).unwrap();
        for d in map.iter() {
            assert!(!d.lockdown_active);
            assert!(!d.mask_mandate_active);
            assert_eq!(d.enforcement_step_counter, 0);
        }
        map.get_mut(DistrictId(1)).lockdown_active = true;
        assert!(map.is_locked_down_at(Cell::new(5, 0)));
        assert!(!map.is_locked_down_at(Cell::new(0, 0)));
    }
}

#[cfg(test)]
mod occupancy {
    use epi_core::{AgentId, Cell};

    use crate::{Grid, Occupancy};

    #[test]
    fn place_and_move() {
        let g = Grid::new(3, 3, true).unwrap();
        let mut occ = Occupancy::new(&g);
        let (a, b) = (AgentId(0), AgentId(1));
        let here = Cell::new(1, 1);
        occ.place(a, here);
        occ.place(b, here);
        assert_eq!(occ.agents_at(here), &[a, b]);
        assert_eq!(occ.cellmates(a, here).collect::<Vec<_>>(), vec![b]);

        let there = Cell::new(2, 0);
        occ.move_agent(a, here, there);
        assert_eq!(occ.agents_at(here), &[b]);
        assert_eq!(occ.agents_at(there), &[a]);
        assert_eq!(occ.len(), 2);
    }

    #[test]
    fn move_to_same_cell_is_noop() {
        let g = Grid::new(2, 2, false).unwrap();
        let mut occ = Occupancy::new(&g);
        let c = Cell::new(0, 1);
        occ.place(AgentId(3), c);
        occ.move_agent(AgentId(3), c, c);
        assert_eq!(occ.agents_at(c), &[AgentId(3)]);
    }

    #[test]
    fn remove_missing_agent() {
        let g = Grid::new(2, 2, false).unwrap();
        let mut occ = Occupancy::new(&g);
        assert!(!occ.remove(AgentId(9), Cell::new(0, 0)));
        assert!(occ.is_empty());
    }
}
