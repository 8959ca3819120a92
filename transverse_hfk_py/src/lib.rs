//! PyO3 bindings to `transverse_hfk`.
//!
//! `state`/`xs`/`os` are sequences of `{1,…,N}`, `out_stream` is any object
//! exposing a `write(str)` method, `verbosity` is `0|1|2`.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use transverse_hfk::verbosity::{NullSink, ProgressSink, Verbosity};
use transverse_hfk::{Grid, GridError, LiftGrid, LiftState, State};

fn to_py_err(e: GridError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

fn verbosity_of(verbosity: u8) -> Verbosity {
    match verbosity {
        0 => Verbosity::Silent,
        1 => Verbosity::Quiet,
        _ => Verbosity::Verbose,
    }
}

fn to_u8_vec(values: Vec<i64>) -> PyResult<Vec<u8>> {
    values
        .into_iter()
        .map(|v| {
            u8::try_from(v).map_err(|_| PyValueError::new_err(format!("{v} is out of range")))
        })
        .collect()
}

/// Writes progress lines to a Python object's `write(str)` method, only
/// ever constructed when `out_stream` was supplied and `verbosity` is
/// `Verbose`.
struct PySink<'py> {
    write: &'py PyAny,
}

impl ProgressSink for PySink<'_> {
    fn on_layer(&mut self, num_ins: i32, num_outs: i32, edge_count: usize) {
        let _ = self
            .write
            .call1((format!("{num_ins} {num_outs} {edge_count}\n"),));
    }
}

/// Only wires `out_stream` up to a real sink when `verbosity` asks for
/// progress lines at all, matching the CLI's own
/// `verbosity.at_least(Verbose)` gate rather than firing on every call that
/// merely supplies a stream.
fn with_sink<R>(
    out_stream: Option<&PyAny>,
    verbosity: Verbosity,
    f: impl FnOnce(&mut dyn ProgressSink) -> R,
) -> PyResult<R> {
    match out_stream {
        Some(stream) if verbosity.at_least(Verbosity::Verbose) => {
            let write = stream.getattr("write")?;
            let mut sink = PySink { write };
            Ok(f(&mut sink))
        }
        _ => Ok(f(&mut NullSink)),
    }
}

/// Is `state` null-homologous in the D0 differential of the grid diagram
/// with decorations `xs`/`os`?
#[pyfunction]
#[pyo3(signature = (state, xs, os, out_stream=None, verbosity=0))]
fn null_homologous_d0q(
    state: Vec<i64>,
    xs: Vec<i64>,
    os: Vec<i64>,
    out_stream: Option<&PyAny>,
    verbosity: u8,
) -> PyResult<bool> {
    let verbosity = verbosity_of(verbosity);
    let grid = Grid::new(to_u8_vec(xs)?, to_u8_vec(os)?).map_err(to_py_err)?;
    let state = State::new(to_u8_vec(state)?).map_err(to_py_err)?;
    with_sink(out_stream, verbosity, |sink| {
        transverse_hfk::null_homologous_d0q(&grid, &state, sink)
    })
}

/// Is `state` null-homologous in the D1 differential of the grid diagram
/// with decorations `xs`/`os`?
#[pyfunction]
#[pyo3(signature = (state, xs, os, out_stream=None, verbosity=0))]
fn null_homologous_d1q(
    state: Vec<i64>,
    xs: Vec<i64>,
    os: Vec<i64>,
    out_stream: Option<&PyAny>,
    verbosity: u8,
) -> PyResult<bool> {
    let verbosity = verbosity_of(verbosity);
    let grid = Grid::new(to_u8_vec(xs)?, to_u8_vec(os)?).map_err(to_py_err)?;
    let state = State::new(to_u8_vec(state)?).map_err(to_py_err)?;
    with_sink(out_stream, verbosity, |sink| {
        transverse_hfk::null_homologous_d1q(&grid, &state, sink)
    })
}

/// Is `state` (a sequence of `n` per-sheet state sequences) null-homologous
/// in the n-sheet cyclic branched cover's differential?
#[pyfunction]
#[pyo3(signature = (state, n, xs, os, out_stream=None, verbosity=0))]
#[allow(clippy::too_many_arguments)]
fn null_homologous_lift(
    state: Vec<Vec<i64>>,
    n: i64,
    xs: Vec<i64>,
    os: Vec<i64>,
    out_stream: Option<&PyAny>,
    verbosity: u8,
) -> PyResult<bool> {
    let verbosity = verbosity_of(verbosity);
    let grid = LiftGrid::new(to_u8_vec(xs)?, to_u8_vec(os)?, n).map_err(to_py_err)?;

    let mut sheets = Vec::with_capacity(state.len());
    for sheet in state {
        sheets.push(State::new(to_u8_vec(sheet)?).map_err(to_py_err)?);
    }
    let lift_state = LiftState::new(sheets);
    grid.validate_state(&lift_state).map_err(to_py_err)?;

    with_sink(out_stream, verbosity, |sink| {
        transverse_hfk::null_homologous_lift(&grid, &lift_state, sink)
    })
}

#[pymodule]
fn transverse_hfk(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(null_homologous_d0q, m)?)?;
    m.add_function(wrap_pyfunction!(null_homologous_d1q, m)?)?;
    m.add_function(wrap_pyfunction!(null_homologous_lift, m)?)?;
    Ok(())
}
