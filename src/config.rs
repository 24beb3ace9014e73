use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use log::info;
use serde::{Deserialize, Serialize};
use crate::eos::factory::EosPair;
use crate::eos::{Eos, Simplified, Variant};
use crate::error::Error;
use crate::grid::GridKind;
use crate::loader::{Format, HGridNames, TsNames, ZGridNames};




/**
 * Selection of an equation of state. The coefficient overrides only apply
 * to the simplified law.
 */
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EosConfig {
    pub variant: Variant,
    pub params: Option<Simplified>,
}

impl Default for EosConfig {
    fn default() -> Self {
        Self { variant: Variant::Teos10, params: None }
    }
}

impl EosConfig {
    pub fn build(&self) -> EosPair {
        EosPair::new(Eos::new(self.variant, self.params))
    }
}




/**
 * Run configuration: which equation of state and grid topology to use, and
 * where the loaders find their variables. Every section may be omitted.
 */
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub eos: EosConfig,
    pub grid: GridKind,
    pub hgrid: HGridNames,
    pub zgrid: ZGridNames,
    pub ts: TsNames,
}




// ============================================================================
impl Config {

    pub fn from_cbor<R: Read>(reader: R) -> Result<Self, Error> {
        ciborium::de::from_reader(reader).map_err(|e| Error::Decode(e.to_string()))
    }

    pub fn from_msgpack<R: Read>(reader: R) -> Result<Self, Error> {
        rmp_serde::decode::from_read(reader).map_err(|e| Error::Decode(e.to_string()))
    }

    /**
     * Read a configuration file, choosing the decoder from its extension.
     */
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let format = Format::from_path(path)?;
        let reader = BufReader::new(File::open(path)?);

        info!("reading configuration from {}", path.display());

        match format {
            Format::Cbor => Self::from_cbor(reader),
            Format::MessagePack => Self::from_msgpack(reader),
        }
    }
}




// ============================================================================
#[cfg(test)]
mod test {

    use serde::Serialize;
    use super::{Config, EosConfig};
    use crate::eos::{Simplified, Variant};
    use crate::grid::{FoldPivot, GridKind, Tripolar};

    #[derive(Serialize)]
    struct Partial {
        eos: EosConfig,
        grid: GridKind,
    }

    #[test]
    fn empty_documents_give_the_defaults() {
        let mut buffer = Vec::new();
        ciborium::ser::into_writer(&std::collections::BTreeMap::<String, u8>::new(), &mut buffer).unwrap();
        let config = Config::from_cbor(buffer.as_slice()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.zgrid.deptht, "gdept_0");
        assert_eq!(config.eos.build().variant(), Variant::Teos10);
    }

    #[test]
    fn sections_are_read_from_cbor() {
        let partial = Partial {
            eos: EosConfig { variant: Variant::Simplified, params: Some(Simplified { nu: 0.0, ..Simplified::default() }) },
            grid: GridKind::Tripolar(Tripolar { pivot: FoldPivot::T }),
        };
        let mut buffer = Vec::new();
        ciborium::ser::into_writer(&partial, &mut buffer).unwrap();
        let config = Config::from_cbor(buffer.as_slice()).unwrap();

        assert_eq!(config.eos, partial.eos);
        assert_eq!(config.grid, partial.grid);
        assert_eq!(config.ts.to, "to");
    }

    #[test]
    fn sections_are_read_from_msgpack() {
        let partial = Partial {
            eos: EosConfig { variant: Variant::Eos80, params: None },
            grid: GridKind::default(),
        };
        let buffer = rmp_serde::encode::to_vec_named(&partial).unwrap();
        let config = Config::from_msgpack(buffer.as_slice()).unwrap();
        assert_eq!(config.eos.build().variant(), Variant::Eos80);
    }

    #[test]
    fn garbage_is_a_decode_error() {
        assert!(matches!(Config::from_cbor(&[0xff, 0x00][..]), Err(crate::error::Error::Decode(_))));
    }
}
