//! Split antigenic-drift prior: cached Gaussian log-likelihood of isolate
//! locations around a forking drift trajectory.
//!
//! Purpose
//! -------
//! Wire the pure pieces of `antigenic::core` (trajectory, SSR, kernel) to a
//! set of host-owned parameters and expose them through
//! [`ModelLikelihood`], so a Metropolis–Hastings host can flip parameters
//! and re-score cheaply.
//!
//! Key behaviors
//! -------------
//! - Construction validates shapes, declares hyperparameter bounds, resizes
//!   and zeroes the branch assignment (labelled like the dates), freezes the
//!   earliest and latest dates, and subscribes a [`DirtyFlag`] to every
//!   input.
//! - `log_likelihood` recomputes `ℓ = (N/2)·ln τ − (τ/2)·SSR` only when the
//!   flag is dirty.
//! - `store_state` / `restore_state` snapshot and roll back the cached value;
//!   `restore_state` forces a recompute.
//! - Diagnostics (`expected_locations`, `residuals`,
//!   `sum_of_squared_residuals`) are always computed fresh and never touch
//!   the cache.
//!
//! Invariants & assumptions
//! ------------------------
//! - `N = rows(locations) = dim(dates) = dim(assignment)` and
//!   `D = cols(locations) ≥ 1` at construction. Later resizes by the host
//!   are detected at evaluation and reported as errors.
//! - `t₀ = min(dates)` is captured once and never refreshed; later date
//!   changes still invalidate the cache.
//! - Bounds are declared, never enforced.
//! - Not thread-safe; one prior per chain.
use crate::{
    antigenic::{
        core::{
            bounds::HyperparameterBounds,
            cache::{LikelihoodCache, log_likelihood_kernel},
            inputs::SplitPriorInputs,
            listener::DirtyFlag,
            residuals,
            trajectory::{Branch, TrajectoryParams},
            validation::{validate_inputs, validate_isolate_lengths},
        },
        errors::{SplitPriorError, SplitResult},
        models::traits::ModelLikelihood,
    },
    parameter::{ChangeEvent, ChangeListener, MatrixParameter, ParamResult, Parameter},
};
use log::debug;
use ndarray::{Array1, Array2};
use std::rc::Rc;

/// AntigenicSplitPrior — cached likelihood of the split drift model.
///
/// Fields
/// ------
/// - `inputs`: shared handles to the seven parameters.
/// - `count`, `dimension`: `N` and `D`, fixed at construction.
/// - `earliest_date`, `latest_date`: date range frozen at construction.
/// - `cache`: last computed / stored log-likelihood.
/// - `dirty`: the only strong handle to the flag; inputs hold it weakly, so
///   dropping the prior unsubscribes it.
///
/// Performance
/// -----------
/// - A recompute is O(N·D) with no heap allocation.
/// - A clean read is O(1).
#[derive(Debug)]
pub struct AntigenicSplitPrior {
    inputs: SplitPriorInputs,
    count: usize,
    dimension: usize,
    earliest_date: f64,
    latest_date: f64,
    cache: LikelihoodCache,
    dirty: Rc<DirtyFlag>,
}

impl AntigenicSplitPrior {
    pub const NAME: &'static str = "antigenicSplitPrior";

    /// Build a prior over the given parameters.
    ///
    /// Parameters
    /// ----------
    /// - `locations`: `N × D` matrix of observed coordinates, `D ≥ 1`.
    /// - `dates`: `N` sampling dates.
    /// - `slope`, `precision`, `split_time`, `split_angle`: scalar
    ///   hyperparameters (coordinate 0 is read).
    /// - `assignment`: branch labels; resized to `N` and zeroed here.
    ///
    /// Errors
    /// ------
    /// - `SplitPriorError::ZeroDimension` when `D == 0`.
    /// - `SplitPriorError::RaggedLocations` when a row is not `D`-dimensional.
    /// - `SplitPriorError::DimensionMismatch` when `dates` is not length `N`.
    /// - `SplitPriorError::EmptyHyperparameter` for an empty scalar input.
    ///
    /// Notes
    /// -----
    /// - Out-of-bounds hyperparameter values are accepted.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        locations: MatrixParameter, dates: Parameter, slope: Parameter, precision: Parameter,
        split_time: Parameter, split_angle: Parameter, assignment: Parameter,
    ) -> SplitResult<Self> {
        AntigenicSplitPrior::from_inputs(SplitPriorInputs {
            locations,
            dates,
            slope,
            precision,
            split_time,
            split_angle,
            assignment,
        })
    }

    /// Build a prior from an already-assembled input bundle. Same contract
    /// as [`AntigenicSplitPrior::new`].
    pub fn from_inputs(inputs: SplitPriorInputs) -> SplitResult<Self> {
        let (count, dimension) = validate_inputs(&inputs)?;
        let (earliest_date, latest_date) = inputs.dates.with_values(date_range);

        HyperparameterBounds::declared().install(&inputs);
        initialize_assignment(&inputs.assignment, &inputs.dates, count)?;

        let dirty = Rc::new(DirtyFlag::new());
        inputs.subscribe(dirty.clone());

        debug!(
            "{}: {count} isolates in {dimension} dimensions, dates [{earliest_date}, {latest_date}]",
            Self::NAME
        );

        Ok(AntigenicSplitPrior {
            inputs,
            count,
            dimension,
            earliest_date,
            latest_date,
            cache: LikelihoodCache::new(),
            dirty,
        })
    }

    pub fn inputs(&self) -> &SplitPriorInputs {
        &self.inputs
    }

    /// Number of isolates `N`.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Embedding dimension `D`.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// `t₀`, the earliest date seen at construction.
    pub fn earliest_date(&self) -> f64 {
        self.earliest_date
    }

    pub fn latest_date(&self) -> f64 {
        self.latest_date
    }

    pub fn time_span(&self) -> f64 {
        self.latest_date - self.earliest_date
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty.is_dirty()
    }

    pub fn stored_log_likelihood(&self) -> f64 {
        self.cache.stored()
    }

    /// Current hyperparameter snapshot.
    pub fn trajectory_params(&self) -> SplitResult<TrajectoryParams> {
        trajectory_params(&self.inputs, self.earliest_date)
    }

    /// Fresh SSR from the current values; bypasses the cache.
    pub fn sum_of_squared_residuals(&self) -> SplitResult<f64> {
        sum_of_squares(&self.inputs, self.count, self.dimension, self.earliest_date)
    }

    /// Expected `D`-dimensional position of isolate `index`.
    pub fn expected_location(&self, index: usize) -> SplitResult<Array1<f64>> {
        let params = self.trajectory_params()?;
        let date = self.inputs.dates.value(index)?;
        let branch = Branch::from_assignment(self.inputs.assignment.value(index)?);
        Ok(params.expected_location(date, branch, self.dimension))
    }

    /// Expected positions of every isolate as an `N × D` array.
    pub fn expected_locations(&self) -> SplitResult<Array2<f64>> {
        let params = self.trajectory_params()?;
        let mut out = Array2::zeros((self.count, self.dimension));
        self.inputs.dates.with_values(|dates| {
            self.inputs.assignment.with_values(|assignments| {
                validate_isolate_lengths(self.count, dates.len(), assignments.len())?;
                for (i, mut row) in out.outer_iter_mut().enumerate() {
                    let branch = Branch::from_assignment(assignments[i]);
                    for (axis, x) in row.iter_mut().enumerate() {
                        *x = params.expected_coordinate(dates[i], branch, axis);
                    }
                }
                Ok::<(), SplitPriorError>(())
            })
        })?;
        Ok(out)
    }

    /// Observed minus expected positions as an `N × D` array.
    ///
    /// Coordinates past AG2 are expected at zero, so their residual is the
    /// observed value and the squared Frobenius norm equals the SSR.
    pub fn residuals(&self) -> SplitResult<Array2<f64>> {
        let observed = self.inputs.locations.to_array()?;
        let expected = self.expected_locations()?;
        Ok(observed - &expected)
    }
}

impl ModelLikelihood for AntigenicSplitPrior {
    fn model_name(&self) -> &str {
        Self::NAME
    }

    fn log_likelihood(&mut self) -> SplitResult<f64> {
        let inputs = &self.inputs;
        let (count, dimension, t0) = (self.count, self.dimension, self.earliest_date);
        self.cache.get_or_compute(&self.dirty, || {
            let precision = inputs.precision.value(0)?;
            let ssr = sum_of_squares(inputs, count, dimension, t0)?;
            log_likelihood_kernel(count, precision, ssr)
        })
    }

    fn make_dirty(&mut self) {
        self.dirty.mark();
    }

    fn store_state(&mut self) {
        self.cache.store();
    }

    fn restore_state(&mut self) {
        self.cache.restore(&self.dirty);
    }

    fn accept_state(&mut self) {}

    fn variable_changed(&mut self, event: &ChangeEvent) {
        self.dirty.variable_changed(event);
    }
}

fn date_range(dates: &[f64]) -> (f64, f64) {
    let Some((&first, rest)) = dates.split_first() else {
        return (0.0, 0.0);
    };
    rest.iter().fold((first, first), |(earliest, latest), &d| {
        (if d < earliest { d } else { earliest }, if d > latest { d } else { latest })
    })
}

fn initialize_assignment(assignment: &Parameter, dates: &Parameter, count: usize) -> ParamResult<()> {
    assignment.set_dimension(count);
    for i in 0..count {
        assignment.set_value_quietly(i, 0.0)?;
    }
    let labels = (0..count).map(|i| dates.dimension_name(i)).collect::<ParamResult<Vec<_>>>()?;
    assignment.set_dimension_names(labels)
}

fn trajectory_params(inputs: &SplitPriorInputs, earliest_date: f64) -> SplitResult<TrajectoryParams> {
    Ok(TrajectoryParams::new(
        inputs.slope.value(0)?,
        inputs.split_time.value(0)?,
        inputs.split_angle.value(0)?,
        earliest_date,
    ))
}

fn sum_of_squares(
    inputs: &SplitPriorInputs, count: usize, dimension: usize, earliest_date: f64,
) -> SplitResult<f64> {
    let params = trajectory_params(inputs, earliest_date)?;
    inputs.dates.with_values(|dates| {
        inputs.assignment.with_values(|assignments| {
            validate_isolate_lengths(count, dates.len(), assignments.len())?;
            residuals::sum_of_squared_residuals(
                &inputs.locations,
                dates,
                assignments,
                &params,
                dimension,
            )
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::antigenic::core::bounds::{SLOPE_BOUNDS, SPLIT_ANGLE_BOUNDS, SPLIT_TIME_BOUNDS};
    use crate::parameter::ChangeKind;
    use ndarray::array;
    use std::f64::consts::FRAC_PI_2;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The concrete scenarios: single pre-split isolate, post-split on each
    //   branch, AG2 mismatch, extra-dimension shrinkage, dirty propagation.
    // - Construction side effects (bounds, assignment reset and labels,
    //   frozen t₀, subscriptions) and construction failures.
    // - Cache protocol through `ModelLikelihood`.
    //
    // Cross-cutting properties (symmetry, scaling, rollback) live in
    // `tests/integration_split_prior.rs`.
    // -------------------------------------------------------------------------

    const TOL: f64 = 1e-9;

    // Host-side handles plus the prior built over them, with the scenario
    // defaults β = 1, τ = 1, s = 30, θ = π/2.
    fn scenario(locations: Array2<f64>, dates: Vec<f64>) -> (AntigenicSplitPrior, SplitPriorInputs) {
        let inputs = SplitPriorInputs {
            locations: MatrixParameter::from_array("locations", locations),
            dates: Parameter::new("dates", dates),
            slope: Parameter::scalar("regressionSlope", 1.0),
            precision: Parameter::scalar("regressionPrecision", 1.0),
            split_time: Parameter::scalar("splitTime", 30.0),
            split_angle: Parameter::scalar("splitAngle", FRAC_PI_2),
            assignment: Parameter::new("splitAssignment", Vec::new()),
        };
        let prior = AntigenicSplitPrior::from_inputs(inputs.clone())
            .expect("scenario inputs should construct");
        (prior, inputs)
    }

    #[test]
    // Purpose
    // -------
    // A single isolate at the origin on the earliest date scores zero.
    //
    // Given
    // -----
    // - N = 1, t = [0], L = [[0, 0]], a = [0].
    //
    // Expect
    // ------
    // - SSR = 0 and ℓ = 0.5·ln(1)·1 − 0 = 0.
    fn single_pre_split_isolate_scores_zero() {
        let (mut prior, _) = scenario(array![[0.0, 0.0]], vec![0.0]);

        assert_eq!(prior.sum_of_squared_residuals().unwrap(), 0.0);
        assert_eq!(prior.log_likelihood().unwrap(), 0.0);
    }

    #[test]
    // Purpose
    // -------
    // Post-split isolates sitting exactly on their branch score zero.
    //
    // Given
    // -----
    // - Two isolates dated 0 and 100 (so t₀ = 0, Δ − s = 70 for the second).
    // - Branch 0 with L = [30, 70]; separately branch 1 with L = [30, −70].
    //
    // Expect
    // ------
    // - ℓ ≈ 0 in both configurations.
    fn post_split_isolates_on_their_branch_score_zero() {
        let (mut upper, _) = scenario(array![[0.0, 0.0], [30.0, 70.0]], vec![0.0, 100.0]);
        assert!(upper.log_likelihood().unwrap().abs() < TOL);

        let (mut lower, host) = scenario(array![[0.0, 0.0], [30.0, -70.0]], vec![0.0, 100.0]);
        host.assignment.set_value(1, 1.0).unwrap();
        assert!(lower.log_likelihood().unwrap().abs() < TOL);
    }

    #[test]
    // Purpose
    // -------
    // A single post-split isolate measured against the frozen origin.
    //
    // Given
    // -----
    // - N = 1, t = [100] so t₀ = 100 and Δ = 0 (pre-split!), L = [[30, 70]].
    //
    // Expect
    // ------
    // - Expected position is the origin, SSR = 30² + 70² = 5800.
    fn single_isolate_defines_its_own_origin() {
        let (mut prior, _) = scenario(array![[30.0, 70.0]], vec![100.0]);

        assert_eq!(prior.earliest_date(), 100.0);
        assert!((prior.sum_of_squared_residuals().unwrap() - 5800.0).abs() < TOL);
        assert!((prior.log_likelihood().unwrap() + 2900.0).abs() < TOL);
    }

    #[test]
    // Purpose
    // -------
    // An isolate on the wrong side of AG2 is penalized by the full branch
    // magnitude.
    //
    // Given
    // -----
    // - Isolates at dates 0 and 100; the second at L = [30, 0] on branch 0.
    //
    // Expect
    // ------
    // - SSR = 70² = 4900; ℓ = (2/2)·ln 1 − 0.5·4900 = −2450.
    fn ag2_mismatch_is_penalized() {
        let (mut prior, _) = scenario(array![[0.0, 0.0], [30.0, 0.0]], vec![0.0, 100.0]);

        assert!((prior.sum_of_squared_residuals().unwrap() - 4900.0).abs() < TOL);
        assert!((prior.log_likelihood().unwrap() + 2450.0).abs() < TOL);
    }

    #[test]
    // Purpose
    // -------
    // Third and later coordinates are shrunk toward zero.
    //
    // Given
    // -----
    // - D = 3, N = 1, t = [0], L = [[0, 0, 5]].
    //
    // Expect
    // ------
    // - SSR = 25, ℓ = −12.5.
    fn extra_dimension_is_shrunk() {
        let (mut prior, _) = scenario(array![[0.0, 0.0, 5.0]], vec![0.0]);

        assert_eq!(prior.sum_of_squared_residuals().unwrap(), 25.0);
        assert_eq!(prior.log_likelihood().unwrap(), -12.5);
    }

    #[test]
    // Purpose
    // -------
    // A slope change through the host handle invalidates the cache.
    //
    // Given
    // -----
    // - Isolates at dates 0 and 10 with L = [[0, 0], [5, 0]] (SSR > 0 at β = 1).
    //
    // Expect
    // ------
    // - The prior is clean after the first read and dirty after `set_value`.
    // - The second read reflects β = 0.5 (SSR = 0, ℓ = 0).
    fn slope_change_propagates() {
        let (mut prior, host) = scenario(array![[0.0, 0.0], [5.0, 0.0]], vec![0.0, 10.0]);

        let before = prior.log_likelihood().unwrap();
        assert!(!prior.is_dirty());

        host.slope.set_value(0, 0.5).unwrap();
        assert!(prior.is_dirty());

        let after = prior.log_likelihood().unwrap();
        assert!((before + 12.5).abs() < TOL);
        assert!(after.abs() < TOL);
        assert_ne!(before, after);
    }

    #[test]
    // Purpose
    // -------
    // Construction declares bounds, resets and labels the assignment, and
    // subscribes to every input.
    //
    // Given
    // -----
    // - Three labelled dates and an assignment parameter pre-filled with
    //   five ones; split time 100 (outside its bounds).
    //
    // Expect
    // ------
    // - Assignment has dimension 3, all zeros, labels copied from dates.
    // - Declared bounds are queryable; the out-of-bounds value is kept.
    // - Each input (and each location row) has exactly one listener.
    fn construction_side_effects() {
        let dates = Parameter::new("dates", vec![1968.0, 1972.0, 1975.0]);
        dates
            .set_dimension_names(vec!["A/HK/1968".into(), "A/EN/1972".into(), "A/VI/1975".into()])
            .unwrap();
        let assignment = Parameter::new("splitAssignment", vec![1.0; 5]);
        let split_time = Parameter::scalar("splitTime", 100.0);
        let slope = Parameter::scalar("regressionSlope", 1.0);
        let angle = Parameter::scalar("splitAngle", 1.0);
        let locations = MatrixParameter::from_array("locations", Array2::zeros((3, 2)));

        let prior = AntigenicSplitPrior::new(
            locations.clone(),
            dates.clone(),
            slope.clone(),
            Parameter::scalar("regressionPrecision", 1.0),
            split_time.clone(),
            angle.clone(),
            assignment.clone(),
        )
        .unwrap();

        assert_eq!(assignment.values(), vec![0.0, 0.0, 0.0]);
        assert_eq!(assignment.dimension_name(1).unwrap(), "A/EN/1972");
        assert_eq!(split_time.value(0).unwrap(), 100.0);
        assert_eq!(split_time.bounds(), Some(SPLIT_TIME_BOUNDS));
        assert_eq!(slope.bounds(), Some(SLOPE_BOUNDS));
        assert_eq!(angle.bounds(), Some(SPLIT_ANGLE_BOUNDS));
        assert_eq!(prior.earliest_date(), 1968.0);
        assert_eq!(prior.latest_date(), 1975.0);
        assert_eq!(prior.time_span(), 7.0);
        for p in [&dates, &slope, &split_time, &angle, &assignment] {
            assert_eq!(p.listener_count(), 1);
        }
        for row in locations.rows() {
            assert_eq!(row.listener_count(), 1);
        }
    }

    #[test]
    // Purpose
    // -------
    // Shape problems fail at construction.
    //
    // Given
    // -----
    // - Locations with D = 0; locations with 2 rows but 3 dates.
    //
    // Expect
    // ------
    // - `ZeroDimension`; `DimensionMismatch { name: "dates", 2, 3 }`.
    fn construction_rejects_bad_shapes() {
        let build = |locations: Array2<f64>, dates: Vec<f64>| {
            AntigenicSplitPrior::new(
                MatrixParameter::from_array("locations", locations),
                Parameter::new("dates", dates),
                Parameter::scalar("regressionSlope", 1.0),
                Parameter::scalar("regressionPrecision", 1.0),
                Parameter::scalar("splitTime", 30.0),
                Parameter::scalar("splitAngle", 1.0),
                Parameter::new("splitAssignment", Vec::new()),
            )
        };

        assert_eq!(build(Array2::zeros((2, 0)), vec![0.0, 1.0]).unwrap_err(), SplitPriorError::ZeroDimension);
        assert_eq!(
            build(Array2::zeros((2, 2)), vec![0.0, 1.0, 2.0]).unwrap_err(),
            SplitPriorError::DimensionMismatch { name: "dates", expected: 2, actual: 3 }
        );
    }

    #[test]
    // Purpose
    // -------
    // Non-positive precision fails at evaluation and leaves the cache dirty;
    // fixing the precision recovers.
    //
    // Given
    // -----
    // - Scenario with τ set to 0 by the host.
    //
    // Expect
    // ------
    // - `InvalidPrecision { value: 0.0 }`, prior still dirty.
    // - After τ = 1, evaluation succeeds.
    fn non_positive_precision_is_an_evaluation_error() {
        let (mut prior, host) = scenario(array![[0.0, 0.0]], vec![0.0]);
        host.precision.set_value(0, 0.0).unwrap();

        assert_eq!(
            prior.log_likelihood().unwrap_err(),
            SplitPriorError::InvalidPrecision { value: 0.0 }
        );
        assert!(prior.is_dirty());

        host.precision.set_value(0, 1.0).unwrap();
        assert_eq!(prior.log_likelihood().unwrap(), 0.0);
    }

    #[test]
    // Purpose
    // -------
    // With no isolates the log-likelihood is zero.
    //
    // Given
    // -----
    // - A 0 × 2 location matrix, no dates, τ = 3.
    //
    // Expect
    // ------
    // - `count() == 0`, ℓ = 0, and the assignment stays empty.
    fn empty_sample_scores_zero() {
        let (mut prior, host) = scenario(Array2::zeros((0, 2)), Vec::new());
        host.precision.set_value(0, 3.0).unwrap();

        assert_eq!(prior.count(), 0);
        assert_eq!(prior.log_likelihood().unwrap(), 0.0);
        assert_eq!(host.assignment.dimension(), 0);
    }

    #[test]
    // Purpose
    // -------
    // Date changes invalidate the cache but do not move the frozen origin.
    //
    // Given
    // -----
    // - Dates [10, 20, 30], L = [[0, 0], [10, 0], [20, 0]] (on the
    //   trajectory, ℓ = 0).
    // - Host then moves the first date to 0.
    //
    // Expect
    // ------
    // - `earliest_date()` stays 10. Only the first isolate moves off the
    //   trajectory (Δ = −10, residual 10), so SSR = 100 and ℓ = −50. A
    //   refreshed origin would instead give SSR = 200.
    fn earliest_date_is_frozen() {
        let (mut prior, host) =
            scenario(array![[0.0, 0.0], [10.0, 0.0], [20.0, 0.0]], vec![10.0, 20.0, 30.0]);
        assert!(prior.log_likelihood().unwrap().abs() < TOL);

        host.dates.set_value(0, 0.0).unwrap();
        assert!(prior.is_dirty());

        assert_eq!(prior.earliest_date(), 10.0);
        assert!((prior.sum_of_squared_residuals().unwrap() - 100.0).abs() < TOL);
        assert!((prior.log_likelihood().unwrap() + 50.0).abs() < TOL);
    }

    #[test]
    // Purpose
    // -------
    // The cache protocol of `ModelLikelihood`: `store_state` keeps the flag,
    // `restore_state` rolls back and forces a recompute, `make_dirty` forces
    // a recompute, `accept_state` changes nothing.
    //
    // Given
    // -----
    // - Scenario with an AG2 mismatch (ℓ = −2450).
    //
    // Expect
    // ------
    // - Transitions match the protocol and the stored value is −2450.
    fn cache_protocol_transitions() {
        let (mut prior, _) = scenario(array![[0.0, 0.0], [30.0, 0.0]], vec![0.0, 100.0]);
        let l1 = prior.log_likelihood().unwrap();

        prior.store_state();
        assert!(!prior.is_dirty());
        assert_eq!(prior.stored_log_likelihood(), l1);

        prior.accept_state();
        assert!(!prior.is_dirty());

        prior.make_dirty();
        assert!(prior.is_dirty());
        assert_eq!(prior.log_likelihood().unwrap(), l1);

        prior.restore_state();
        assert!(prior.is_dirty());
        assert_eq!(prior.log_likelihood().unwrap(), l1);
        assert_eq!(prior.model_name(), "antigenicSplitPrior");
    }

    #[test]
    // Purpose
    // -------
    // Diagnostics agree with each other and with the cached SSR.
    //
    // Given
    // -----
    // - Three isolates in D = 3 with mixed branches.
    //
    // Expect
    // ------
    // - `expected_location(i)` equals row `i` of `expected_locations()`.
    // - ‖residuals‖² equals `sum_of_squared_residuals()`.
    fn diagnostics_are_consistent() {
        let (prior, host) = scenario(
            array![[1.0, -1.0, 0.5], [31.0, 12.0, -2.0], [30.0, -69.0, 1.0]],
            vec![0.0, 40.0, 100.0],
        );
        host.assignment.set_value(2, 1.0).unwrap();

        let expected = prior.expected_locations().unwrap();
        for i in 0..3 {
            assert_eq!(prior.expected_location(i).unwrap(), expected.row(i).to_owned());
        }

        let r = prior.residuals().unwrap();
        let frob: f64 = r.iter().map(|x| x * x).sum();
        assert!((frob - prior.sum_of_squared_residuals().unwrap()).abs() < TOL);
    }

    #[test]
    // Purpose
    // -------
    // The manual change callback invalidates the cache, so a host that routes
    // events by hand (after quiet writes) still gets a fresh value.
    //
    // Given
    // -----
    // - Isolates at dates 0 and 10 with L = [[0, 0], [5, 0]] (ℓ = −12.5 at
    //   β = 1), evaluated until clean.
    // - β moved to 0.5 with `set_value_quietly`.
    //
    // Expect
    // ------
    // - Before the callback the prior is clean and still returns −12.5.
    // - After `variable_changed` it is dirty and the next read is 0.
    fn manual_change_callback_forces_recompute() {
        let (mut prior, host) = scenario(array![[0.0, 0.0], [5.0, 0.0]], vec![0.0, 10.0]);
        assert!((prior.log_likelihood().unwrap() + 12.5).abs() < TOL);

        host.slope.set_value_quietly(0, 0.5).unwrap();
        assert!(!prior.is_dirty());
        assert!((prior.log_likelihood().unwrap() + 12.5).abs() < TOL);

        prior.variable_changed(&ChangeEvent {
            parameter: "regressionSlope".into(),
            index: Some(0),
            kind: ChangeKind::ValueChanged,
        });
        assert!(prior.is_dirty());
        assert!(prior.log_likelihood().unwrap().abs() < TOL);
        assert!(!prior.is_dirty());
    }

    #[test]
    // Purpose
    // -------
    // Dropping a prior ends its subscriptions, so rebuilding priors over the
    // same host handles does not accumulate listeners.
    //
    // Given
    // -----
    // - One scenario prior, dropped; then 100 priors built and dropped over
    //   the same handles; then one kept alive.
    //
    // Expect
    // ------
    // - Zero live listeners on every input after each drop, exactly one while
    //   the last prior lives, and writes still invalidate it.
    fn dropped_prior_unsubscribes() {
        let (prior, host) = scenario(array![[0.0, 0.0]], vec![0.0]);
        assert_eq!(host.slope.listener_count(), 1);
        drop(prior);
        assert_eq!(host.slope.listener_count(), 0);

        for _ in 0..100 {
            let rebuilt = AntigenicSplitPrior::from_inputs(host.clone()).unwrap();
            drop(rebuilt);
        }
        for (_, p) in host.hyperparameters() {
            assert_eq!(p.listener_count(), 0);
        }
        assert_eq!(host.dates.listener_count(), 0);
        assert_eq!(host.assignment.listener_count(), 0);
        assert_eq!(host.locations.rows()[0].listener_count(), 0);

        let mut live = AntigenicSplitPrior::from_inputs(host.clone()).unwrap();
        assert_eq!(host.slope.listener_count(), 1);
        live.log_likelihood().unwrap();
        host.slope.set_value(0, 2.0).unwrap();
        assert!(live.is_dirty());
    }
}
