use std::collections::BTreeMap;

use super::loader::GuidelineLoadError;
use super::region::Region;
use super::FplError;

/// Largest household size published in a guideline table.
pub const TABULATED_SIZES: usize = 8;

/// Poverty guideline amounts for one region, dense over sizes `1..=TABULATED_SIZES`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuidelineTable {
    amounts: BTreeMap<usize, u64>,
    increment: u64,
}

impl GuidelineTable {
    /// Build a table from size/amount pairs, rejecting gaps and zero amounts.
    pub fn new(amounts: BTreeMap<usize, u64>, increment: u64) -> Result<Self, GuidelineLoadError> {
        for size in 1..=TABULATED_SIZES {
            match amounts.get(&size) {
                None => return Err(GuidelineLoadError::MissingSize { size }),
                Some(0) => return Err(GuidelineLoadError::ZeroAmount { size }),
                Some(_) => {}
            }
        }

        if let Some(size) = amounts
            .keys()
            .copied()
            .find(|size| *size == 0 || *size > TABULATED_SIZES)
        {
            return Err(GuidelineLoadError::UnexpectedSize { size });
        }

        Ok(Self { amounts, increment })
    }

    pub fn from_amounts(
        amounts: [u64; TABULATED_SIZES],
        increment: u64,
    ) -> Result<Self, GuidelineLoadError> {
        let amounts = amounts
            .iter()
            .enumerate()
            .map(|(index, amount)| (index + 1, *amount))
            .collect();
        Self::new(amounts, increment)
    }

    /// Tabulated amount at exactly `size`, without extrapolation.
    pub fn amount(&self, size: usize) -> Option<u64> {
        self.amounts.get(&size).copied()
    }

    pub fn increment(&self) -> u64 {
        self.increment
    }

    pub fn entries(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.amounts.iter().map(|(size, amount)| (*size, *amount))
    }
}

/// The three regional guideline tables, loaded once and shared read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuidelineTables {
    standard: GuidelineTable,
    alaska: GuidelineTable,
    hawaii: GuidelineTable,
}

impl GuidelineTables {
    pub fn new(standard: GuidelineTable, alaska: GuidelineTable, hawaii: GuidelineTable) -> Self {
        Self {
            standard,
            alaska,
            hawaii,
        }
    }

    /// 2021 HHS poverty guidelines.
    pub fn builtin() -> Self {
        let table = |amounts: [u64; TABULATED_SIZES], region: Region| GuidelineTable {
            amounts: (1..=TABULATED_SIZES).zip(amounts).collect(),
            increment: region.additional_person_increment(),
        };

        Self {
            standard: table(
                [12880, 17420, 21960, 26500, 31040, 35580, 40120, 44660],
                Region::Standard,
            ),
            alaska: table(
                [16090, 21770, 27450, 33130, 38810, 44490, 50170, 55850],
                Region::Alaska,
            ),
            hawaii: table(
                [14820, 20040, 25260, 30480, 35700, 40920, 46140, 51360],
                Region::Hawaii,
            ),
        }
    }

    pub fn table(&self, region: Region) -> &GuidelineTable {
        match region {
            Region::Standard => &self.standard,
            Region::Alaska => &self.alaska,
            Region::Hawaii => &self.hawaii,
        }
    }

    /// Guideline amount for a household of `size` in `region`.
    ///
    /// Sizes past the table extend the largest entry by the region's per-person increment.
    pub fn lookup(&self, region: Region, size: usize) -> Result<u64, FplError> {
        if size < 1 {
            return Err(FplError::InvalidSize { size });
        }

        let table = self.table(region);
        if size <= TABULATED_SIZES {
            return table
                .amount(size)
                .ok_or(FplError::NotFound { region, size });
        }

        let base = table.amount(TABULATED_SIZES).ok_or(FplError::NotFound {
            region,
            size: TABULATED_SIZES,
        })?;

        u64::try_from(size - TABULATED_SIZES)
            .ok()
            .and_then(|extra| extra.checked_mul(table.increment()))
            .and_then(|extra| base.checked_add(extra))
            .ok_or(FplError::InvalidSize { size })
    }
}
