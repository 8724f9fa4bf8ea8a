//! antigenic_drift — split antigenic-drift prior with optional Python bindings.
//!
//! Purpose
//! -------
//! Provide the Gaussian log-likelihood of virus isolate locations in an
//! antigenic map under a drift trajectory that forks into two symmetric
//! branches at a split time, cached for Metropolis–Hastings hosts. With the
//! `python-bindings` feature this crate root is also the PyO3 bridge for the
//! `_antigenic_drift` extension module.
//!
//! Key behaviors
//! -------------
//! - [`parameter`]: shared, observable parameter handles the host mutates.
//! - [`antigenic`]: the trajectory model, the cached prior
//!   ([`antigenic::AntigenicSplitPrior`]) and its likelihood protocol.
//! - [`utils`]: array-like conversion for the Python layer.
//! - `SplitPrior` (feature-gated): a Python class owning a prior together
//!   with its parameters.
//!
//! Invariants & assumptions
//! ------------------------
//! - Everything is single-threaded (`Rc`/`RefCell`); the Python class is
//!   `unsendable` for the same reason.
//! - All numerical work lives in `antigenic::core`; this file performs only
//!   FFI glue and error mapping.
//!
//! Conventions
//! -----------
//! - Errors propagate as [`antigenic::SplitPriorError`] /
//!   [`parameter::ParamError`] internally and become `ValueError` at the PyO3
//!   boundary.
//! - Logging goes through the `log` facade; the embedding application picks
//!   the backend.
//!
//! Testing notes
//! -------------
//! - Unit tests sit next to each module; `tests/integration_split_prior.rs`
//!   drives a full store / mutate / restore cycle and cross-checks the
//!   kernel against `statrs`.

pub mod antigenic;
pub mod parameter;
pub mod utils;

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArray2};

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    antigenic::{AntigenicSplitPrior, ModelLikelihood, core::SplitPriorInputs},
    parameter::{MatrixParameter, Parameter},
    utils::{extract_f64_matrix, extract_f64_vector},
};

/// SplitPrior — Python-facing owner of a split prior and its parameters.
///
/// Purpose
/// -------
/// Let Python code build an [`AntigenicSplitPrior`], move its parameters,
/// and drive the store / evaluate / restore cycle without holding Rust
/// parameter handles.
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `SplitPrior(locations, dates, slope, precision, split_time, split_angle,
/// dimension=2)`:
/// - `locations`: 2-D array-like, one row per isolate, at least one column.
/// - `dates`: 1-D array-like with one date per isolate.
/// - `slope`, `precision`, `split_time`, `split_angle`: floats.
/// - `dimension`: number of coordinates when `locations` is an empty plain
///   sequence; ignored otherwise.
///
/// Notes
/// -----
/// - Setters notify the prior exactly like host writes do, so the next
///   `log_likelihood()` recomputes.
/// - Branch assignments start at 0 for every isolate.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "antigenic_drift.priors", unsendable)]
pub struct SplitPrior {
    inner: AntigenicSplitPrior,
}

#[cfg(feature = "python-bindings")]
impl SplitPrior {
    fn inputs(&self) -> &SplitPriorInputs {
        self.inner.inputs()
    }
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl SplitPrior {
    #[new]
    #[pyo3(
        signature = (locations, dates, slope, precision, split_time, split_angle, dimension = 2),
        text_signature = "(locations, dates, slope, precision, split_time, split_angle, dimension=2)"
    )]
    pub fn new<'py>(
        locations: &Bound<'py, PyAny>, dates: &Bound<'py, PyAny>, slope: f64, precision: f64,
        split_time: f64, split_angle: f64, dimension: usize,
    ) -> PyResult<Self> {
        let locations =
            MatrixParameter::from_array("locations", extract_f64_matrix(locations, dimension)?);
        let dates = Parameter::from_array("dates", extract_f64_vector(dates)?);
        let inner = AntigenicSplitPrior::new(
            locations,
            dates,
            Parameter::scalar("regressionSlope", slope),
            Parameter::scalar("regressionPrecision", precision),
            Parameter::scalar("splitTime", split_time),
            Parameter::scalar("splitAngle", split_angle),
            Parameter::new("splitAssignment", Vec::new()),
        )?;
        Ok(SplitPrior { inner })
    }

    /// Current log-likelihood (recomputed only after a change).
    pub fn log_likelihood(&mut self) -> PyResult<f64> {
        Ok(self.inner.log_likelihood()?)
    }

    pub fn store_state(&mut self) {
        self.inner.store_state();
    }

    pub fn restore_state(&mut self) {
        self.inner.restore_state();
    }

    pub fn accept_state(&mut self) {
        self.inner.accept_state();
    }

    pub fn make_dirty(&mut self) {
        self.inner.make_dirty();
    }

    pub fn set_slope(&self, value: f64) -> PyResult<()> {
        Ok(self.inputs().slope.set_value(0, value)?)
    }

    pub fn set_precision(&self, value: f64) -> PyResult<()> {
        Ok(self.inputs().precision.set_value(0, value)?)
    }

    pub fn set_split_time(&self, value: f64) -> PyResult<()> {
        Ok(self.inputs().split_time.set_value(0, value)?)
    }

    pub fn set_split_angle(&self, value: f64) -> PyResult<()> {
        Ok(self.inputs().split_angle.set_value(0, value)?)
    }

    /// Put isolate `index` on branch `value` (1 → lower, anything else → upper).
    pub fn set_assignment(&self, index: usize, value: f64) -> PyResult<()> {
        Ok(self.inputs().assignment.set_value(index, value)?)
    }

    pub fn set_date(&self, index: usize, value: f64) -> PyResult<()> {
        Ok(self.inputs().dates.set_value(index, value)?)
    }

    pub fn set_location(&self, row: usize, column: usize, value: f64) -> PyResult<()> {
        Ok(self.inputs().locations.set_value(row, column, value)?)
    }

    pub fn assignments(&self) -> Vec<f64> {
        self.inputs().assignment.values()
    }

    pub fn sum_of_squared_residuals(&self) -> PyResult<f64> {
        Ok(self.inner.sum_of_squared_residuals()?)
    }

    /// Expected positions as an `(N, D)` array.
    pub fn expected_locations<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<f64>>> {
        Ok(self.inner.expected_locations()?.into_pyarray(py))
    }

    /// Observed minus expected positions as an `(N, D)` array.
    pub fn residuals<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<f64>>> {
        Ok(self.inner.residuals()?.into_pyarray(py))
    }

    #[getter]
    pub fn model_name(&self) -> &str {
        AntigenicSplitPrior::NAME
    }

    #[getter]
    pub fn count(&self) -> usize {
        self.inner.count()
    }

    #[getter]
    pub fn dimension(&self) -> usize {
        self.inner.dimension()
    }

    #[getter]
    pub fn earliest_date(&self) -> f64 {
        self.inner.earliest_date()
    }

    #[getter]
    pub fn latest_date(&self) -> f64 {
        self.inner.latest_date()
    }

    #[getter]
    pub fn is_dirty(&self) -> bool {
        self.inner.is_dirty()
    }

    #[getter]
    pub fn stored_log_likelihood(&self) -> f64 {
        self.inner.stored_log_likelihood()
    }
}

/// _antigenic_drift — PyO3 module initializer for the Python extension.
///
/// Creates the `priors` submodule, attaches it to the parent module, and
/// registers it in `sys.modules` so `antigenic_drift.priors` imports with
/// dot notation.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _antigenic_drift<'py>(py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let priors_mod = PyModule::new(py, "priors")?;
    priors_mod.add_class::<SplitPrior>()?;
    m.add_submodule(&priors_mod)?;

    py.import("sys")?.getattr("modules")?.set_item("antigenic_drift.priors", priors_mod)?;
    Ok(())
}
