//! `Block` and `BlockSequence`: the requested runs of activity.
//!
//! A block asks for `floor(weeks * 5)` working days labeled with one
//! activity code. A sequence is consumed strictly in order.

use crate::activity::ActivityCode;
use acal_core::errors::{Error, Result};
use acal_core::utilities::data_parsers::parse_week_count;
use acal_core::{ensure, Real, Size, WORKING_DAYS_PER_WEEK};
use serde::Serialize;
use std::collections::BTreeMap;

/// Optional `(year, semester)` metadata attached to a block.
///
/// `year` is the 1-based index of the academic year within the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct BlockTag {
    /// 1-based academic year index.
    pub year: u8,
    /// Semester, 1 or 2.
    pub semester: u8,
}

impl BlockTag {
    /// Validate and build a tag.
    pub fn new(year: u8, semester: u8) -> Result<Self> {
        ensure!(year >= 1, "block year", year.to_string(), "a year index of 1 or more");
        ensure!(
            semester == 1 || semester == 2,
            "block semester",
            semester.to_string(),
            "1 or 2"
        );
        Ok(Self { year, semester })
    }
}

/// A requested run of working days with a single activity code.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    code: ActivityCode,
    weeks: Real,
    tag: Option<BlockTag>,
}

impl Block {
    /// Create an untagged block.
    ///
    /// # Errors
    /// Returns a configuration error if `code` is the weekend marker or
    /// `weeks` is not a positive number. A block shorter than 0.2 weeks
    /// needs no working days and is skipped by the holiday-aware engine.
    pub fn new(code: ActivityCode, weeks: Real) -> Result<Self> {
        ensure!(
            code.is_block_code(),
            "block code",
            code.label(),
            "one of Т, П, ПА, ГИА, К (В marks non-working days only)"
        );
        ensure!(
            weeks.is_finite() && weeks > 0.0,
            "week count",
            weeks.to_string(),
            "a positive number"
        );
        Ok(Self {
            code,
            weeks,
            tag: None,
        })
    }

    /// Create a block carrying year/semester metadata.
    pub fn tagged(code: ActivityCode, weeks: Real, year: u8, semester: u8) -> Result<Self> {
        let mut block = Self::new(code, weeks)?;
        block.tag = Some(BlockTag::new(year, semester)?);
        Ok(block)
    }

    /// Activity code.
    pub fn code(&self) -> ActivityCode {
        self.code
    }

    /// Requested length in study weeks.
    pub fn weeks(&self) -> Real {
        self.weeks
    }

    /// Year/semester metadata, if any.
    pub fn tag(&self) -> Option<BlockTag> {
        self.tag
    }

    /// Working days the block consumes: `floor(weeks * 5)`.
    pub fn working_days_needed(&self) -> Size {
        (self.weeks * WORKING_DAYS_PER_WEEK as Real).floor() as Size
    }
}

/// Ordered, non-empty list of blocks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockSequence {
    blocks: Vec<Block>,
}

impl BlockSequence {
    /// Wrap a list of validated blocks.
    ///
    /// # Errors
    /// Returns a configuration error if `blocks` is empty.
    pub fn new(blocks: Vec<Block>) -> Result<Self> {
        ensure!(
            !blocks.is_empty(),
            "block sequence",
            "",
            "at least one block"
        );
        Ok(Self { blocks })
    }

    /// Build a sequence from a whitespace-separated order string and a
    /// table of week counts keyed by activity label.
    ///
    /// ```
    /// use acal_schedule::BlockSequence;
    /// use std::collections::BTreeMap;
    ///
    /// let mut weeks = BTreeMap::new();
    /// weeks.insert("Т".to_string(), "10".to_string());
    /// weeks.insert("К".to_string(), "2".to_string());
    /// let seq = BlockSequence::from_order("Т К", &weeks).unwrap();
    /// assert_eq!(seq.len(), 2);
    /// ```
    pub fn from_order(order: &str, weeks: &BTreeMap<String, String>) -> Result<Self> {
        let mut table: BTreeMap<ActivityCode, &str> = BTreeMap::new();
        for (label, count) in weeks {
            table.insert(label.parse()?, count.as_str());
        }

        let blocks = order
            .split_whitespace()
            .map(|token| {
                let code: ActivityCode = token.parse()?;
                let text = table.get(&code).ok_or_else(|| {
                    Error::configuration(
                        "week count",
                        token,
                        "an entry in the weeks table for every code in the order",
                    )
                })?;
                Block::new(code, parse_week_count(text)?)
            })
            .collect::<Result<Vec<_>>>()?;

        ensure!(
            !blocks.is_empty(),
            "block order",
            order,
            "at least one activity label"
        );
        Ok(Self { blocks })
    }

    /// Blocks in consumption order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterate over the blocks in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    /// Total working days requested by every block.
    pub fn total_working_days(&self) -> Size {
        self.blocks.iter().map(Block::working_days_needed).sum()
    }
}

impl<'a> IntoIterator for &'a BlockSequence {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
