//! Matrix parameters stored as a list of row parameters.
//!
//! A [`MatrixParameter`] groups `rows` vector [`Parameter`]s that share a
//! common column count. Rows stay individually addressable handles, so the
//! host can propose a move on one isolate's coordinates without touching the
//! others, and listeners registered on the matrix see the row that changed.
use crate::parameter::{
    errors::{ParamError, ParamResult},
    events::ChangeListener,
    variable::Parameter,
};
use ndarray::{Array2, ArrayView1};
use std::rc::Rc;

/// MatrixParameter — `rows × columns` matrix of `f64` made of row handles.
///
/// Fields
/// ------
/// - `id`: identifier of the matrix as a whole.
/// - `column_count`: declared row dimension; fixed at construction so an
///   empty matrix still knows its width.
/// - `rows`: row handles, each of dimension `column_count` at construction.
///
/// Invariants
/// ----------
/// - Every row has dimension `column_count` when the matrix is built. Rows
///   are shared handles and the host may later resize one; consumers that
///   care re-check row dimensions when they read.
#[derive(Debug, Clone)]
pub struct MatrixParameter {
    id: Rc<str>,
    column_count: usize,
    rows: Vec<Parameter>,
}

impl MatrixParameter {
    /// Build a matrix from existing row handles.
    ///
    /// Errors
    /// ------
    /// - `ParamError::RaggedRows` for the first row whose dimension is not
    ///   `column_count`.
    pub fn new(
        id: impl Into<String>, column_count: usize, rows: Vec<Parameter>,
    ) -> ParamResult<Self> {
        let id: String = id.into();
        for (row, p) in rows.iter().enumerate() {
            if p.dimension() != column_count {
                return Err(ParamError::RaggedRows {
                    id,
                    row,
                    expected: column_count,
                    actual: p.dimension(),
                });
            }
        }
        Ok(MatrixParameter { id: Rc::from(id), column_count, rows })
    }

    /// Build a matrix whose row `i` is a fresh parameter `"{id}.{i}"`
    /// holding `values.row(i)`.
    pub fn from_array(id: impl Into<String>, values: Array2<f64>) -> MatrixParameter {
        let id: String = id.into();
        let column_count = values.ncols();
        let rows = values
            .outer_iter()
            .enumerate()
            .map(|(i, row)| Parameter::new(format!("{id}.{i}"), row.to_vec()))
            .collect();
        MatrixParameter { id: Rc::from(id), column_count, rows }
    }

    pub fn id(&self) -> Rc<str> {
        Rc::clone(&self.id)
    }

    /// Number of row parameters.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Declared dimension of each row parameter.
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    pub fn rows(&self) -> &[Parameter] {
        &self.rows
    }

    /// Handle to row `row`.
    ///
    /// Errors
    /// ------
    /// - `ParamError::RowOutOfRange` when `row >= row_count()`.
    pub fn row(&self, row: usize) -> ParamResult<&Parameter> {
        self.rows.get(row).ok_or_else(|| ParamError::RowOutOfRange {
            id: self.id.to_string(),
            row,
            rows: self.rows.len(),
        })
    }

    pub fn value(&self, row: usize, column: usize) -> ParamResult<f64> {
        self.row(row)?.value(column)
    }

    /// Write one entry through the row handle, notifying that row's listeners.
    pub fn set_value(&self, row: usize, column: usize, value: f64) -> ParamResult<()> {
        self.row(row)?.set_value(column, value)
    }

    /// Register `listener` on every row.
    pub fn add_listener(&self, listener: Rc<dyn ChangeListener>) {
        for row in &self.rows {
            row.add_listener(Rc::clone(&listener));
        }
    }

    /// Copy the current values into a dense `rows × columns` array.
    ///
    /// Errors
    /// ------
    /// - `ParamError::RaggedRows` if a row was resized after construction.
    pub fn to_array(&self) -> ParamResult<Array2<f64>> {
        let mut out = Array2::zeros((self.rows.len(), self.column_count));
        for (i, (p, mut dst)) in self.rows.iter().zip(out.outer_iter_mut()).enumerate() {
            p.with_values(|src| {
                if src.len() != self.column_count {
                    return Err(ParamError::RaggedRows {
                        id: self.id.to_string(),
                        row: i,
                        expected: self.column_count,
                        actual: src.len(),
                    });
                }
                dst.assign(&ArrayView1::from(src));
                Ok(())
            })?;
        }
        Ok(out)
    }
}
