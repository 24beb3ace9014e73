use std::convert::TryFrom;
use serde::{Deserialize, Serialize};
use crate::error::Error;
use crate::index_space::IndexSpace;




/**
 * A dense 2D array of real values over the (j, i) water-column index space,
 * stored row-major. This is the horizontal layout of the C-grid metrics and
 * masks: one value per column, `shape = (ny, nx)`.
 */
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawField2d")]
pub struct Field2d {
    shape: (usize, usize),
    data: Vec<f64>,
}




/**
 * The serialized form of a field, checked against its shape on the way in.
 */
#[derive(Deserialize)]
struct RawField2d {
    shape: (usize, usize),
    data: Vec<f64>,
}

impl TryFrom<RawField2d> for Field2d {
    type Error = Error;

    fn try_from(raw: RawField2d) -> Result<Self, Self::Error> {
        Self::from_vec(raw.shape, raw.data)
    }
}




impl Field2d {




    /**
     * Generate a field of the given shape with values defined from a closure
     * of the `(j, i)` index.
     */
    pub fn from_function<F>(shape: (usize, usize), f: F) -> Self
    where
        F: Fn(usize, usize) -> f64
    {
        let data = IndexSpace::from_shape(shape).iter().map(|(j, i)| f(j, i)).collect();
        Self { shape, data }
    }


    pub fn uniform(shape: (usize, usize), value: f64) -> Self {
        Self { shape, data: vec![value; shape.0 * shape.1] }
    }


    /**
     * Wrap a row-major buffer. The buffer length must match the shape.
     */
    pub fn from_vec(shape: (usize, usize), data: Vec<f64>) -> Result<Self, Error> {
        if data.len() != shape.0 * shape.1 {
            Err(Error::configuration(format!(
                "buffer of length {} does not fit shape {:?}", data.len(), shape)))
        } else {
            Ok(Self { shape, data })
        }
    }




    /**
     * Return the logical dimensions `(ny, nx)` of the backing array.
     */
    pub fn dim(&self) -> (usize, usize) {
        self.shape
    }


    pub fn index_space(&self) -> IndexSpace {
        IndexSpace::from_shape(self.shape)
    }


    pub fn data(&self) -> &[f64] {
        &self.data
    }


    pub fn into_data(self) -> Vec<f64> {
        self.data
    }




    /**
     * Return the value at the given `(j, i)` index.
     */
    pub fn get(&self, index: (usize, usize)) -> f64 {
        self.validate_index(index);
        self.data[index.0 * self.shape.1 + index.1]
    }

    fn validate_index(&self, index: (usize, usize)) {
        if index.0 >= self.shape.0 || index.1 >= self.shape.1 {
            panic!("index ({} {}) out of range on field of shape ({} {})",
                index.0,
                index.1,
                self.shape.0,
                self.shape.1);
        }
    }
}




// ============================================================================
#[cfg(test)]
mod test {

    use super::Field2d;

    #[test]
    fn field_indexing_is_row_major() {
        let field = Field2d::from_function((2, 3), |j, i| (10 * j + i) as f64);
        assert_eq!(field.dim(), (2, 3));
        assert_eq!(field.get((1, 2)), 12.0);
        assert_eq!(field.data(), &[0.0, 1.0, 2.0, 10.0, 11.0, 12.0]);
    }

    #[test]
    fn buffer_length_must_match_shape() {
        assert!(Field2d::from_vec((2, 2), vec![1.0; 3]).is_err());
        assert_eq!(Field2d::from_vec((2, 2), vec![1.0; 4]).unwrap(), Field2d::uniform((2, 2), 1.0));
    }

    #[test]
    fn decoding_checks_the_buffer_against_the_shape() {
        #[derive(serde::Serialize)]
        struct Stored {
            shape: (usize, usize),
            data: Vec<f64>,
        }
        let mut buffer = Vec::new();
        ciborium::ser::into_writer(&Stored { shape: (3, 3), data: vec![1.0; 4] }, &mut buffer).unwrap();
        assert!(ciborium::de::from_reader::<Field2d, _>(buffer.as_slice()).is_err());

        let field = Field2d::from_function((2, 2), |j, i| (j + i) as f64);
        let mut buffer = Vec::new();
        ciborium::ser::into_writer(&field, &mut buffer).unwrap();
        assert_eq!(ciborium::de::from_reader::<Field2d, _>(buffer.as_slice()).unwrap(), field);
    }

    #[test]
    #[should_panic]
    fn out_of_range_access_panics() {
        Field2d::uniform((2, 2), 0.0).get((2, 0));
    }
}
