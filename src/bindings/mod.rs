mod quadrant;

use pyo3::prelude::*;
use pyo3::types::PyModule;

/// Quadrant folding of sparse detector images
#[pymodule]
pub fn _rust(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    // fold / resize
    quadrant::register(m)?;
    Ok(())
}
