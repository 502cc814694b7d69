//! Polygon feature document (KML 2.2)
//!
//! Each polygon becomes a `Placemark` named by its 1-based detection index,
//! holding a single outer boundary ring of `longitude,latitude` pairs.

use std::io::Write;
use std::path::Path;
use log::info;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::coordinate::{GeoCoordinateMapper, GeoPolygon};
use crate::plan::errors::{PlanError, PlanResult};
use crate::plan::types::Polygon;
use crate::utils::fs_utils::write_atomically;

/// KML namespace
pub const KML_NAMESPACE: &str = "http://www.opengis.net/kml/2.2";

fn emit<W: Write>(xml: &mut Writer<W>, event: Event<'_>) -> PlanResult<()> {
    xml.write_event(event).map_err(|e| PlanError::XmlError(e.to_string()))
}

fn open<W: Write>(xml: &mut Writer<W>, name: &str) -> PlanResult<()> {
    emit(xml, Event::Start(BytesStart::new(name)))
}

fn close<W: Write>(xml: &mut Writer<W>, name: &str) -> PlanResult<()> {
    emit(xml, Event::End(BytesEnd::new(name)))
}

fn text_element<W: Write>(xml: &mut Writer<W>, name: &str, text: &str) -> PlanResult<()> {
    open(xml, name)?;
    emit(xml, Event::Text(BytesText::new(text)))?;
    close(xml, name)
}

/// `lon,lat lon,lat ...` in ring order
pub fn coordinates_text(ring: &GeoPolygon) -> String {
    ring.vertices()
        .iter()
        .map(|p| format!("{},{}", p.longitude, p.latitude))
        .collect::<Vec<_>>()
        .join(" ")
}

fn write_placemark<W: Write>(xml: &mut Writer<W>, name: &str, ring: &GeoPolygon) -> PlanResult<()> {
    open(xml, "Placemark")?;
    text_element(xml, "name", name)?;
    open(xml, "Polygon")?;
    open(xml, "outerBoundaryIs")?;
    open(xml, "LinearRing")?;
    text_element(xml, "coordinates", &coordinates_text(ring))?;
    close(xml, "LinearRing")?;
    close(xml, "outerBoundaryIs")?;
    close(xml, "Polygon")?;
    close(xml, "Placemark")
}

/// Write the polygon document to any writer
///
/// # Arguments
/// * `writer` - Destination
/// * `polygons` - Polygon features in detection order
/// * `mapper` - Mapper built for the canvas the polygons were traced on
///
/// # Returns
/// The number of placemarks written
pub fn write_polygons_kml<W: Write>(writer: W,
                                    polygons: &[Polygon],
                                    mapper: &GeoCoordinateMapper) -> PlanResult<usize> {
    let mut xml = Writer::new_with_indent(writer, b' ', 2);

    emit(&mut xml, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    emit(&mut xml, Event::Start(BytesStart::new("kml").with_attributes([("xmlns", KML_NAMESPACE)])))?;
    open(&mut xml, "Document")?;

    for (index, polygon) in polygons.iter().enumerate() {
        let ring = mapper.map_polygon(polygon);
        write_placemark(&mut xml, &(index + 1).to_string(), &ring)?;
    }

    close(&mut xml, "Document")?;
    close(&mut xml, "kml")?;
    xml.into_inner().flush()?;

    Ok(polygons.len())
}

/// Write the polygon document to `path`, replacing any previous file only on success
pub fn save_polygons_kml(path: &Path,
                         polygons: &[Polygon],
                         mapper: &GeoCoordinateMapper) -> PlanResult<usize> {
    let mut placemarks = 0;
    write_atomically(path, |writer| {
        placemarks = write_polygons_kml(writer, polygons, mapper)?;
        Ok(())
    })?;

    info!("Saved {} polygons to {}", placemarks, path.display());
    Ok(placemarks)
}
