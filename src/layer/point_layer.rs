use super::FieldMapping;
use crate::{
    footprint::{fmt_number, ScaleValue, ValidationError},
    geometry::Location,
    parameters::FieldParameters,
    Result,
};

use std::{fs::File, io::Read, path::Path};

use csv::StringRecord;

/// A photo centroid record with the values the footprint is computed from
#[derive(Clone, Debug, PartialEq)]
pub struct PointRecord {
    /// unreadable coordinate text is rejected here, keeping the raw value
    pub location: std::result::Result<Location, ValidationError>,
    pub scale: Option<ScaleValue>,
    pub size: Option<String>,
    /// passthrough values, aligned with [`FieldMapping::passthrough`]
    pub attributes: Vec<Option<String>>,
}

/// Point layer stored as a csv file with a header row
pub struct PointLayer<R: Read> {
    reader: csv::Reader<R>,
    mapping: FieldMapping,
    epsg: u16,
}

impl PointLayer<File> {
    pub fn open(path: &Path, fields: &FieldParameters, epsg: u16) -> Result<PointLayer<File>> {
        PointLayer::from_reader(File::open(path)?, fields, epsg)
    }
}

impl<R: Read> PointLayer<R> {
    pub fn from_reader(rdr: R, fields: &FieldParameters, epsg: u16) -> Result<PointLayer<R>> {
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(rdr);
        let mapping = FieldMapping::new(reader.headers()?.iter(), fields)?;

        Ok(PointLayer {
            reader,
            mapping,
            epsg,
        })
    }

    pub fn mapping(&self) -> &FieldMapping {
        &self.mapping
    }

    /// Records in file order. Only malformed csv is an error here,
    /// bad values are left for the footprint validation.
    pub fn records(&mut self) -> impl Iterator<Item = Result<PointRecord>> + '_ {
        let mapping = &self.mapping;
        let epsg = self.epsg;

        self.reader.records().map(move |r| -> Result<PointRecord> {
            Ok(to_point_record(&r?, mapping, epsg))
        })
    }
}

fn non_empty(record: &StringRecord, i: usize) -> Option<&str> {
    record.get(i).map(str::trim).filter(|s| !s.is_empty())
}

/// NaN for an empty cell, the raw text if it is not a number
fn coordinate(record: &StringRecord, i: usize) -> std::result::Result<f64, String> {
    match non_empty(record, i) {
        Some(text) => text.parse::<f64>().map_err(|_| {
            log::warn!(
                "Unreadable coordinate {text:?} on line {}",
                record.position().map(|p| p.line()).unwrap_or_default()
            );
            text.to_string()
        }),
        None => Ok(f64::NAN),
    }
}

fn read_location(
    record: &StringRecord,
    mapping: &FieldMapping,
    epsg: u16,
) -> std::result::Result<Location, ValidationError> {
    match (coordinate(record, mapping.x), coordinate(record, mapping.y)) {
        (Ok(x), Ok(y)) => Ok(Location::new(x, y, epsg)),
        (x, y) => {
            let text = |c: std::result::Result<f64, String>| {
                c.map_or_else(|raw| raw, |v| fmt_number(&v))
            };
            Err(ValidationError::CentroidUnreadable {
                x: text(x),
                y: text(y),
            })
        }
    }
}

fn to_point_record(record: &StringRecord, mapping: &FieldMapping, epsg: u16) -> PointRecord {
    let location = read_location(record, mapping, epsg);

    PointRecord {
        location,
        scale: non_empty(record, mapping.scale).map(ScaleValue::from),
        size: non_empty(record, mapping.size).map(str::to_string),
        attributes: mapping
            .passthrough
            .iter()
            .map(|(i, _)| non_empty(record, *i).map(str::to_string))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TARGET_EPSG;

    const CSV: &str = "\
OBJECTID,x,y,Scale,FrameFormat,Filename,ProjectCode
1,450000,4500000,24000,9x9,a.tif,P1
2,,,12000,,b.tif,
3,oops,4400000, ,4x5,c.tif,P3
4,450000,,24000,9x9,d.tif,P4
";

    #[test]
    fn reads_records() -> Result<()> {
        let mut layer =
            PointLayer::from_reader(CSV.as_bytes(), &FieldParameters::default(), TARGET_EPSG)?;

        assert_eq!(
            layer.mapping().passthrough_names().collect::<Vec<_>>(),
            vec!["Scale", "FrameFormat", "Filename", "ProjectCode"]
        );

        let records = layer.records().collect::<Result<Vec<_>>>()?;
        assert_eq!(records.len(), 4);

        assert_eq!(
            records[0],
            PointRecord {
                location: Ok(Location::new(450_000., 4_500_000., TARGET_EPSG)),
                scale: Some(ScaleValue::Text("24000".to_string())),
                size: Some("9x9".to_string()),
                attributes: vec![
                    Some("24000".to_string()),
                    Some("9x9".to_string()),
                    Some("a.tif".to_string()),
                    Some("P1".to_string()),
                ],
            }
        );

        let empty = records[1].location.as_ref().unwrap();
        assert!(empty.x.is_nan() && empty.y.is_nan());
        assert_eq!(records[1].size, None);
        assert_eq!(records[1].attributes[3], None);

        assert_eq!(
            records[2].location,
            Err(ValidationError::CentroidUnreadable {
                x: "oops".to_string(),
                y: "4400000.0".to_string()
            })
        );
        assert_eq!(
            records[2].location.as_ref().unwrap_err().to_string(),
            "centroid: oops,4400000.0"
        );
        assert_eq!(records[2].scale, None);

        let no_y = records[3].location.as_ref().unwrap();
        assert_eq!(no_y.x, 450_000.);
        assert!(no_y.y.is_nan());
        Ok(())
    }
}
