//! Administrative districts.
//!
//! The grid is split into `n` vertical strips of whole columns.  When the
//! width does not divide evenly, the first `width mod n` districts take one
//! extra column, so every cell belongs to exactly one district and strip
//! widths differ by at most one.
//!
//! Each `District` also carries the enforcement state the policy controller
//! reads and writes: the lockdown and mask-mandate flags and the step counter
//! that paces re-evaluation.

use std::ops::Range;

use epi_core::{Cell, DistrictId};

use crate::{Grid, SpatialError, SpatialResult};

// ── District ──────────────────────────────────────────────────────────────────

/// One column strip of the grid plus its current enforcement state.
#[derive(Clone, Debug, PartialEq)]
pub struct District {
    pub id: DistrictId,

    /// Half-open column range `[start, end)` covered by this district.
    pub columns: Range<u32>,

    pub lockdown_active:     bool,
    pub mask_mandate_active: bool,

    /// Ticks since the last evaluation.  Reset to 0 whenever the controller
    /// evaluates this district.
    pub enforcement_step_counter: u64,
}

impl District {
    fn new(id: DistrictId, columns: Range<u32>) -> Self {
        Self {
            id,
            columns,
            lockdown_active:          false,
            mask_mandate_active:      false,
            enforcement_step_counter: 0,
        }
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.columns.contains(&cell.x)
    }

    /// Number of columns in the strip.
    #[inline]
    pub fn width(&self) -> u32 {
        self.columns.end - self.columns.start
    }
}

// ── DistrictMap ───────────────────────────────────────────────────────────────

/// The total partition of a grid into districts.
#[derive(Clone, Debug)]
pub struct DistrictMap {
    districts: Vec<District>,

    /// `column_owner[x]` is the district containing column `x`.
    column_owner: Vec<DistrictId>,

    height: u32,
}

impl DistrictMap {
    /// Partition `grid` into `count` column strips.
    ///
    /// Fails when `count` is zero or exceeds the grid width, since some strip
    /// would then have no columns.
    pub fn new(grid: &Grid, count: u32) -> SpatialResult<Self> {
        let width = grid.width();
        if count == 0 || count > width {
            return Err(SpatialError::DistrictCount { districts: count, width });
        }

        let base  = width / count;
        let extra = width % count;

        let mut districts    = Vec::with_capacity(count as usize);
        let mut column_owner = Vec::with_capacity(width as usize);
        let mut start = 0u32;
        for i in 0..count {
            let span = base + u32::from(i < extra);
            let id = DistrictId(i);
            districts.push(District::new(id, start..start + span));
            column_owner.extend(std::iter::repeat_n(id, span as usize));
            start += span;
        }
        debug_assert_eq!(start, width);

        Ok(Self { districts, column_owner, height: grid.height() })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.districts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.districts.is_empty()
    }

    /// District containing `cell`.  `cell` must lie on the grid.
    #[inline]
    pub fn district_of(&self, cell: Cell) -> DistrictId {
        self.column_owner[cell.x as usize]
    }

    #[inline]
    pub fn get(&self, id: DistrictId) -> &District {
        &self.districts[id.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: DistrictId) -> &mut District {
        &mut self.districts[id.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &District> {
        self.districts.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut District> {
        self.districts.iter_mut()
    }

    /// `true` when the district containing `cell` is under lockdown.
    #[inline]
    pub fn is_locked_down_at(&self, cell: Cell) -> bool {
        self.get(self.district_of(cell)).lockdown_active
    }

    /// Every cell of district `id`, column by column.
    pub fn cells_of(&self, id: DistrictId) -> impl Iterator<Item = Cell> + '_ {
        let height = self.height;
        self.get(id)
            .columns
            .clone()
            .flat_map(move |x| (0..height).map(move |y| Cell::new(x, y)))
    }

    /// Number of cells in district `id`.
    #[inline]
    pub fn cell_count(&self, id: DistrictId) -> usize {
        self.get(id).width() as usize * self.height as usize
    }
}
