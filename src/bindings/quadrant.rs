use crate::error::QuadrantError;
use crate::quadrant::{fold_quadrants, resize_folded, FoldOptions, QuadrantMask};
use crate::sparse::SparseMatrix;
use numpy::{IntoPyArray, PyArray1, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

type PyCoo<'py> = (&'py PyArray1<f64>, &'py PyArray1<i64>, &'py PyArray1<i64>, (usize, usize));

impl From<QuadrantError> for PyErr {
    fn from(err: QuadrantError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

fn to_indices(values: &[i64], name: &str) -> PyResult<Vec<usize>> {
    values
        .iter()
        .map(|&v| usize::try_from(v).map_err(|_| PyValueError::new_err(format!("negative {} index: {}", name, v))))
        .collect()
}

fn to_coo(data: PyReadonlyArray1<f64>, row: Vec<i64>, col: Vec<i64>, shape: (usize, usize)) -> PyResult<SparseMatrix<f64>> {
    let data = data.as_array().to_vec();
    let row = to_indices(&row, "row")?;
    let col = to_indices(&col, "col")?;
    Ok(SparseMatrix::new(shape, data, row, col)?)
}

fn into_py_coo(py: Python<'_>, matrix: SparseMatrix<f64>) -> PyCoo<'_> {
    let (shape, data, row, col) = matrix.into_parts();
    let row: Vec<i64> = row.into_iter().map(|r| r as i64).collect();
    let col: Vec<i64> = col.into_iter().map(|c| c as i64).collect();
    (data.into_pyarray(py), row.into_pyarray(py), col.into_pyarray(py), shape)
}

/// 희소 행렬 (data, row, col, shape)을 중심 픽셀 기준으로 접어서 사분면을 합산합니다.
#[pyfunction]
#[pyo3(signature = (data, row, col, shape, x0=None, y0=None, quadrant_filter=None))]
pub fn fold_quadrant_sps<'py>(
    py: Python<'py>,
    data: PyReadonlyArray1<f64>,
    row: Vec<i64>,
    col: Vec<i64>,
    shape: (usize, usize),
    x0: Option<usize>,
    y0: Option<usize>,
    quadrant_filter: Option<Vec<i64>>,
) -> PyResult<PyCoo<'py>> {
    let matrix = to_coo(data, row, col, shape)?;
    let mask = match quadrant_filter {
        Some(flags) => QuadrantMask::from_flags(&flags)?,
        None => QuadrantMask::default(),
    };
    let opts = FoldOptions { x0, y0, mask };

    let folded = py.allow_threads(|| fold_quadrants(&matrix, &opts))?;
    Ok(into_py_coo(py, folded))
}

/// 접힌 행렬을 (rmax, rmax) 크기로 자릅니다.
#[pyfunction]
pub fn resize_folded_sps<'py>(
    py: Python<'py>,
    data: PyReadonlyArray1<f64>,
    row: Vec<i64>,
    col: Vec<i64>,
    shape: (usize, usize),
    rmax: usize,
) -> PyResult<PyCoo<'py>> {
    let matrix = to_coo(data, row, col, shape)?;
    let resized = resize_folded(&matrix, rmax);
    Ok(into_py_coo(py, resized))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(fold_quadrant_sps, m)?)?;
    m.add_function(wrap_pyfunction!(resize_folded_sps, m)?)?;
    Ok(())
}
