mod air;
mod canopy;
mod pet;
mod resistance;
mod vapour;

use ndarray::{arr0, ArrayD, CowArray, IxDyn};
use numpy::{AllowTypeChange, IntoPyArray, PyArrayLikeDyn};
use pyo3::prelude::*;
use pyo3::types::PyFloat;

/// A float, or anything numpy can turn into a float64 array (arrays of
/// any numeric dtype, nested lists, tuples).
#[derive(FromPyObject)]
pub enum ArrayLike<'py> {
    Array(PyArrayLikeDyn<'py, f64, AllowTypeChange>),
    Scalar(f64),
}

impl ArrayLike<'_> {
    pub fn to_array(&self) -> CowArray<'_, f64, IxDyn> {
        match self {
            ArrayLike::Array(array) => array.as_array().into(),
            ArrayLike::Scalar(value) => arr0(*value).into_dyn().into(),
        }
    }
}

/// Zero-dimensional results go back to Python as floats.
pub fn to_python(py: Python<'_>, result: ArrayD<f64>) -> Bound<'_, PyAny> {
    if result.ndim() == 0 {
        if let Some(&value) = result.first() {
            return PyFloat::new(py, value).into_any();
        }
    }
    result.into_pyarray(py).into_any()
}

/// Attach a formula group to `penman_rs` and expose it as
/// `penman_rs.<group>` for `import` statements.
fn add_formula_group(
    root: &Bound<'_, PyModule>,
    group: &Bound<'_, PyModule>,
) -> PyResult<()> {
    root.add_submodule(group)?;
    let qualified = format!("{}.{}", root.name()?, group.name()?);
    root.py()
        .import("sys")?
        .getattr("modules")?
        .set_item(qualified, group)
}

#[pymodule]
fn penman_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let py = m.py();

    add_formula_group(m, &canopy::make_module(py)?)?;
    add_formula_group(m, &resistance::make_module(py)?)?;
    add_formula_group(m, &air::make_module(py)?)?;
    add_formula_group(m, &vapour::make_module(py)?)?;
    add_formula_group(m, &pet::make_module(py)?)?;

    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use numpy::PyReadonlyArrayDyn;
    use pyo3::types::{PyList, PyTuple};

    #[test]
    fn zero_dimensional_result_is_a_float() {
        Python::initialize();
        Python::attach(|py| {
            let value = to_python(py, arr0(2.5).into_dyn());
            assert!(value.is_instance_of::<PyFloat>());
            assert_eq!(value.extract::<f64>().unwrap(), 2.5);
        });
    }

    #[test]
    fn shaped_result_is_an_array() {
        Python::initialize();
        Python::attach(|py| {
            let value = to_python(py, array![[1.0, 2.0], [3.0, 4.0]].into_dyn());
            let array = value.extract::<PyReadonlyArrayDyn<f64>>().unwrap();
            assert_eq!(array.shape(), &[2, 2]);
            assert_eq!(array.as_array()[[1, 0]], 3.0);
        });
    }

    #[test]
    fn lists_and_integers_are_converted() {
        Python::initialize();
        Python::attach(|py| {
            let list = PyList::new(py, [1_i64, 2, 3]).unwrap();
            let converted = list.extract::<ArrayLike>().unwrap();
            assert_eq!(converted.to_array().into_owned(), array![1.0, 2.0, 3.0].into_dyn());

            let tuple = PyTuple::new(py, [0.5_f64, 1.5]).unwrap();
            let converted = tuple.extract::<ArrayLike>().unwrap();
            assert_eq!(converted.to_array().shape(), &[2]);

            let scalar = PyFloat::new(py, 0.12).extract::<ArrayLike>().unwrap();
            assert_eq!(scalar.to_array().ndim(), 0);
        });
    }

    #[test]
    fn formula_group_is_importable_by_qualified_name() {
        Python::initialize();
        Python::attach(|py| {
            let root = PyModule::new(py, "penman_rs").unwrap();
            let group = PyModule::new(py, "canopy").unwrap();
            add_formula_group(&root, &group).unwrap();

            assert!(root.getattr("canopy").unwrap().is(&group));
            let registered = py
                .import("sys")
                .unwrap()
                .getattr("modules")
                .unwrap()
                .get_item("penman_rs.canopy")
                .unwrap();
            assert!(registered.is(&group));
        });
    }
}
