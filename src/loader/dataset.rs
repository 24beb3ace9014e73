use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use crate::error::Error;
use crate::field::Field2d;




/**
 * A named N-dimensional array of real values, stored row-major. Dimension
 * names follow the file they came from until the loaders rename them to the
 * canonical `x`, `y` and `z_t`.
 */
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    pub dims: Vec<String>,
    pub shape: Vec<usize>,
    pub data: Vec<f64>,
}




// ============================================================================
impl Variable {

    pub fn new<S: Into<String>>(dims: Vec<S>, shape: Vec<usize>, data: Vec<f64>) -> Result<Self, Error> {
        let dims: Vec<String> = dims.into_iter().map(Into::into).collect();

        if dims.len() != shape.len() {
            return Err(Error::configuration(format!(
                "{} dimension names for a {}-dimensional shape", dims.len(), shape.len())))
        }
        if shape.iter().product::<usize>() != data.len() {
            return Err(Error::configuration(format!(
                "buffer of length {} does not fit shape {:?}", data.len(), shape)))
        }
        Ok(Self { dims, shape, data })
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /**
     * Return the size of the named dimension, if present.
     */
    pub fn dim_size(&self, name: &str) -> Option<usize> {
        self.dims.iter().position(|d| d == name).map(|k| self.shape[k])
    }

    pub fn rename_dim(&mut self, from: &str, to: &str) {
        for d in self.dims.iter_mut().filter(|d| d.as_str() == from) {
            *d = to.to_string()
        }
    }

    /**
     * Remove all dimensions of length one.
     */
    pub fn squeeze(self) -> Self {
        let Self { dims, shape, data } = self;
        let (dims, shape) = dims.into_iter().zip(shape).filter(|(_, n)| *n != 1).unzip();
        Self { dims, shape, data }
    }

    /**
     * Return the value at a multi-dimensional index.
     */
    pub fn get(&self, index: &[usize]) -> f64 {
        assert_eq!(index.len(), self.ndim(), "index rank does not match variable rank");

        let offset = index.iter().zip(&self.shape).fold(0, |offset, (&k, &n)| {
            assert!(k < n, "index {:?} out of range on shape {:?}", index, self.shape);
            offset * n + k
        });
        self.data[offset]
    }

    /**
     * Return the variable as a horizontal field. It must have exactly two
     * dimensions, `(y, x)`, once unit dimensions are squeezed out.
     */
    pub fn into_field2d(self) -> Result<Field2d, Error> {
        let var = self.squeeze();

        if var.ndim() != 2 {
            return Err(Error::configuration(format!(
                "expected a 2-dimensional variable, found dimensions {:?}", var.dims)))
        }
        Field2d::from_vec((var.shape[0], var.shape[1]), var.data)
    }

    /**
     * Replace every value at a masked point with NaN. The mask must match the
     * trailing dimensions of the variable and is broadcast over the leading
     * ones (typically time).
     */
    pub fn mask_where(&mut self, mask: &Mask) -> Result<(), Error> {
        let lead = self.ndim().checked_sub(mask.shape.len());

        let matches = lead.map_or(false, |lead| {
            self.shape[lead..] == mask.shape[..] && self.dims[lead..] == mask.dims[..]
        });

        if !matches {
            return Err(Error::configuration(format!(
                "mask dimensions {:?} {:?} do not trail variable dimensions {:?} {:?}",
                mask.dims, mask.shape, self.dims, self.shape)))
        }
        if mask.water.is_empty() {
            return Ok(())
        }
        for chunk in self.data.chunks_exact_mut(mask.water.len()) {
            for (x, &water) in chunk.iter_mut().zip(&mask.water) {
                if !water {
                    *x = f64::NAN
                }
            }
        }
        Ok(())
    }
}




/**
 * A boolean land/sea mask in the NEMO convention: `true` marks water.
 */
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Mask {
    pub dims: Vec<String>,
    pub shape: Vec<usize>,
    pub water: Vec<bool>,
}




// ============================================================================
impl Mask {

    /**
     * Interpret a numeric variable as a mask: non-zero finite values are
     * water.
     */
    pub fn from_variable(var: Variable) -> Self {
        let water = var.data.iter().map(|x| x.is_finite() && *x != 0.0).collect();
        Self { dims: var.dims, shape: var.shape, water }
    }

    pub fn to_variable(&self) -> Variable {
        let data = self.water.iter().map(|&w| if w { 1.0 } else { 0.0 }).collect();
        Variable { dims: self.dims.clone(), shape: self.shape.clone(), data }
    }

    pub fn count_water(&self) -> usize {
        self.water.iter().filter(|&&w| w).count()
    }
}




/**
 * The on-disk encodings a dataset can be read from.
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Cbor,
    MessagePack,
}




// ============================================================================
impl Format {
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("cbor") => Ok(Format::Cbor),
            Some("msgpack") | Some("mpk") => Ok(Format::MessagePack),
            _ => Err(Error::configuration(format!("unrecognized dataset format: {}", path.display()))),
        }
    }
}




/**
 * A collection of named variables read from one or more files. This plays
 * the role of an opened model output file: the loaders pick variables out
 * of it by name.
 */
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(skip)]
    source: String,
    variables: BTreeMap<String, Variable>,
}




// ============================================================================
impl Dataset {

    pub fn new<S: Into<String>>(source: S) -> Self {
        Self { source: source.into(), variables: BTreeMap::new() }
    }

    /**
     * Open a dataset file, choosing the decoder from the file extension
     * (`.cbor`, or `.msgpack` / `.mpk`).
     */
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let format = Format::from_path(path)?;
        let reader = BufReader::new(File::open(path)?);
        let source = path.display().to_string();

        info!("opening dataset {}", source);

        match format {
            Format::Cbor => Self::from_cbor(reader, source),
            Format::MessagePack => Self::from_msgpack(reader, source),
        }
    }

    /**
     * Open several files as a single dataset. Variable names must not repeat
     * across files.
     */
    pub fn open_many<P: AsRef<Path>>(paths: &[P]) -> Result<Self, Error> {
        info!("opening {} files as a single dataset", paths.len());

        let mut merged = Self::new(
            paths.iter().map(|p| p.as_ref().display().to_string()).collect::<Vec<_>>().join(", "));

        for path in paths {
            merged.merge(Self::open(path)?)?;
        }
        Ok(merged)
    }

    pub fn from_cbor<R: Read, S: Into<String>>(reader: R, source: S) -> Result<Self, Error> {
        let mut dataset: Self = ciborium::de::from_reader(reader).map_err(|e| Error::Decode(e.to_string()))?;
        dataset.source = source.into();
        Ok(dataset)
    }

    pub fn from_msgpack<R: Read, S: Into<String>>(reader: R, source: S) -> Result<Self, Error> {
        let mut dataset: Self = rmp_serde::decode::from_read(reader).map_err(|e| Error::Decode(e.to_string()))?;
        dataset.source = source.into();
        Ok(dataset)
    }

    pub fn to_cbor<W: Write>(&self, writer: W) -> Result<(), Error> {
        ciborium::ser::into_writer(self, writer).map_err(|e| Error::Decode(e.to_string()))
    }

    pub fn to_msgpack<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        let bytes = rmp_serde::encode::to_vec_named(self).map_err(|e| Error::Decode(e.to_string()))?;
        writer.write_all(&bytes)?;
        Ok(())
    }

    /**
     * Write the dataset to a file, choosing the encoder from the extension.
     */
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let path = path.as_ref();
        let writer = BufWriter::new(File::create(path)?);

        match Format::from_path(path)? {
            Format::Cbor => self.to_cbor(writer),
            Format::MessagePack => self.to_msgpack(writer),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn insert<S: Into<String>>(&mut self, name: S, var: Variable) {
        self.variables.insert(name.into(), var);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.variables.keys().map(String::as_str)
    }

    /**
     * Look up a variable by name, failing with `MissingField` when absent.
     */
    pub fn get(&self, name: &str) -> Result<&Variable, Error> {
        self.variables.get(name).ok_or_else(|| Error::missing_field(name, self.source.as_str()))
    }

    /**
     * Rename a dimension in every variable.
     */
    pub fn rename_dim(&mut self, from: &str, to: &str) {
        if from != to {
            for var in self.variables.values_mut() {
                var.rename_dim(from, to)
            }
        }
    }

    pub fn merge(&mut self, other: Self) -> Result<(), Error> {
        for (name, var) in other.variables {
            if self.variables.contains_key(&name) {
                warn!("variable {} appears in more than one file", name);
                return Err(Error::configuration(format!("duplicate variable {} in {}", name, other.source)))
            }
            self.variables.insert(name, var);
        }
        Ok(())
    }
}
