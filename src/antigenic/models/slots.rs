//! Named-slot assembly for the split prior.
//!
//! Hosts that wire models from a configuration document address inputs by
//! slot name rather than by position. [`SplitPriorSlots`] collects handles
//! under those names, checks each one's kind (matrix vs. vector parameter),
//! and builds an [`AntigenicSplitPrior`] once every slot is bound.
//!
//! Slots
//! -----
//! | name                  | kind             | role                     |
//! |-----------------------|------------------|--------------------------|
//! | `locations`           | matrix parameter | `N × D` coordinates      |
//! | `dates`               | parameter        | `N` sampling dates       |
//! | `regressionSlope`     | parameter        | drift rate β             |
//! | `regressionPrecision` | parameter        | precision τ              |
//! | `splitTime`           | parameter        | split time s             |
//! | `splitAngle`          | parameter        | split angle θ            |
//! | `splitAssignment`     | parameter        | branch labels (resized)  |
//!
//! Binding a slot twice replaces the earlier handle.
use crate::{
    antigenic::{
        core::inputs::SplitPriorInputs,
        errors::{SplitPriorError, SplitResult},
        models::split_prior::AntigenicSplitPrior,
    },
    parameter::{MatrixParameter, Parameter},
};

pub const LOCATIONS: &str = "locations";
pub const DATES: &str = "dates";
pub const REGRESSION_SLOPE: &str = "regressionSlope";
pub const REGRESSION_PRECISION: &str = "regressionPrecision";
pub const SPLIT_TIME: &str = "splitTime";
pub const SPLIT_ANGLE: &str = "splitAngle";
pub const SPLIT_ASSIGNMENT: &str = "splitAssignment";

pub const SLOT_NAMES: [&str; 7] =
    [LOCATIONS, DATES, REGRESSION_SLOPE, REGRESSION_PRECISION, SPLIT_TIME, SPLIT_ANGLE, SPLIT_ASSIGNMENT];

pub const DESCRIPTION: &str = "Provides the likelihood of a vector of coordinates in some \
                               multidimensional 'antigenic' space based on an expected \
                               relationship with time.";

/// SplitPriorSlots — partially bound inputs, keyed by slot name.
#[derive(Debug, Clone, Default)]
pub struct SplitPriorSlots {
    locations: Option<MatrixParameter>,
    dates: Option<Parameter>,
    slope: Option<Parameter>,
    precision: Option<Parameter>,
    split_time: Option<Parameter>,
    split_angle: Option<Parameter>,
    assignment: Option<Parameter>,
}

impl SplitPriorSlots {
    pub fn new() -> SplitPriorSlots {
        SplitPriorSlots::default()
    }

    /// Human-readable description of the model these slots build.
    pub fn description() -> &'static str {
        DESCRIPTION
    }

    /// Bind the matrix slot (`locations`).
    ///
    /// Errors
    /// ------
    /// - `SplitPriorError::SlotKindMismatch` when `name` is a vector slot.
    /// - `SplitPriorError::UnknownSlot` when `name` is not a slot.
    pub fn bind_matrix(mut self, name: &str, matrix: MatrixParameter) -> SplitResult<Self> {
        match slot_name(name)? {
            LOCATIONS => {
                self.locations = Some(matrix);
                Ok(self)
            }
            slot => Err(SplitPriorError::SlotKindMismatch { slot, expected: "parameter" }),
        }
    }

    /// Bind a vector slot by name.
    ///
    /// Errors
    /// ------
    /// - `SplitPriorError::SlotKindMismatch` for `locations`.
    /// - `SplitPriorError::UnknownSlot` when `name` is not a slot.
    pub fn bind(mut self, name: &str, parameter: Parameter) -> SplitResult<Self> {
        let target = match slot_name(name)? {
            LOCATIONS => {
                return Err(SplitPriorError::SlotKindMismatch {
                    slot: LOCATIONS,
                    expected: "matrix parameter",
                });
            }
            DATES => &mut self.dates,
            REGRESSION_SLOPE => &mut self.slope,
            REGRESSION_PRECISION => &mut self.precision,
            SPLIT_TIME => &mut self.split_time,
            SPLIT_ANGLE => &mut self.split_angle,
            _ => &mut self.assignment,
        };
        *target = Some(parameter);
        Ok(self)
    }

    /// Slots still unbound, in declaration order.
    pub fn missing(&self) -> Vec<&'static str> {
        let bound = [
            self.locations.is_some(),
            self.dates.is_some(),
            self.slope.is_some(),
            self.precision.is_some(),
            self.split_time.is_some(),
            self.split_angle.is_some(),
            self.assignment.is_some(),
        ];
        SLOT_NAMES.iter().zip(bound).filter(|(_, b)| !b).map(|(name, _)| *name).collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    /// Errors
    /// ------
    /// - `SplitPriorError::MissingSlot` naming the first unbound slot.
    pub fn into_inputs(self) -> SplitResult<SplitPriorInputs> {
        Ok(SplitPriorInputs {
            locations: self.locations.ok_or(SplitPriorError::MissingSlot { slot: LOCATIONS })?,
            dates: self.dates.ok_or(SplitPriorError::MissingSlot { slot: DATES })?,
            slope: self.slope.ok_or(SplitPriorError::MissingSlot { slot: REGRESSION_SLOPE })?,
            precision: self
                .precision
                .ok_or(SplitPriorError::MissingSlot { slot: REGRESSION_PRECISION })?,
            split_time: self.split_time.ok_or(SplitPriorError::MissingSlot { slot: SPLIT_TIME })?,
            split_angle: self
                .split_angle
                .ok_or(SplitPriorError::MissingSlot { slot: SPLIT_ANGLE })?,
            assignment: self
                .assignment
                .ok_or(SplitPriorError::MissingSlot { slot: SPLIT_ASSIGNMENT })?,
        })
    }

    /// Assemble the inputs and construct the prior.
    pub fn build(self) -> SplitResult<AntigenicSplitPrior> {
        AntigenicSplitPrior::from_inputs(self.into_inputs()?)
    }
}

fn slot_name(name: &str) -> SplitResult<&'static str> {
    SLOT_NAMES
        .iter()
        .copied()
        .find(|slot| *slot == name)
        .ok_or_else(|| SplitPriorError::UnknownSlot { name: name.to_string() })
}
