//! Diamond-shaped markers drawn as four line segments around a point.
//!
//! Markers are described by [`MarkerGroup`]s: a region name, a list of marker centers and a [`DiamondStyle`]. A
//! [`DiamondSet`] flattens any number of groups into individual [`DiamondMarker`]s and their edges, ready to be given
//! to a line layer of the host map.

use geomeasure_types::geo::{
    initial_bearing, mercator_scale_factor, GeoPoint, GeoPoint2d, NewGeoPoint, TileSize,
};

mod color;

pub use color::Color;

/// Appearance of diamond markers.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiamondStyle {
    color: Color,
    outline_color: Color,
    base_size: f64,
}

impl Default for DiamondStyle {
    fn default() -> Self {
        Self {
            color: Color::RED,
            outline_color: Color::WHITE,
            base_size: 0.000015,
        }
    }
}

impl DiamondStyle {
    /// Creates a new style. `base_size` is the distance from the center to a vertex in degrees.
    pub fn new(color: Color, outline_color: Color, base_size: f64) -> Self {
        Self {
            color,
            outline_color,
            base_size,
        }
    }

    /// Fill color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Outline color.
    pub fn outline_color(&self) -> Color {
        self.outline_color
    }

    /// Distance from the center to a vertex in degrees.
    pub fn base_size(&self) -> f64 {
        self.base_size
    }

    /// Sets distance from the center to a vertex in degrees.
    pub fn with_base_size(mut self, base_size: f64) -> Self {
        self.base_size = base_size;
        self
    }
}

/// Named set of marker locations sharing one style.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarkerGroup {
    /// Name of the region, copied to every edge.
    pub region: String,
    /// Marker centers.
    pub points: Vec<GeoPoint2d>,
    /// Style of the markers.
    pub style: DiamondStyle,
}

impl MarkerGroup {
    /// Creates a new group.
    pub fn new(region: impl Into<String>, points: Vec<GeoPoint2d>, style: DiamondStyle) -> Self {
        Self {
            region: region.into(),
            points,
            style,
        }
    }
}

/// Regular grid of `rows * cols` points centered at `center`, `spacing` degrees apart.
///
/// Points go row by row from the south-west corner.
pub fn grid_points(center: GeoPoint2d, rows: usize, cols: usize, spacing: f64) -> Vec<GeoPoint2d> {
    let row_offset = rows.saturating_sub(1) as f64 / 2.0;
    let col_offset = cols.saturating_sub(1) as f64 / 2.0;

    (0..rows)
        .flat_map(|row| {
            (0..cols).map(move |col| {
                GeoPoint2d::latlon(
                    center.lat() + (row as f64 - row_offset) * spacing,
                    center.lon() + (col as f64 - col_offset) * spacing,
                )
            })
        })
        .collect()
}

/// One side of a diamond.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiamondEdge {
    /// Index of the marker in its [`DiamondSet`].
    pub diamond_id: usize,
    /// Index of the edge: 0 top-right, 1 right-bottom, 2 bottom-left, 3 left-top.
    pub edge_id: usize,
    /// Start vertex.
    pub from: GeoPoint2d,
    /// End vertex.
    pub to: GeoPoint2d,
}

/// A single diamond marker.
#[derive(Debug, Clone, PartialEq)]
pub struct DiamondMarker {
    center: GeoPoint2d,
    region: String,
    style: DiamondStyle,
}

impl DiamondMarker {
    /// Creates a new marker.
    pub fn new(center: GeoPoint2d, region: impl Into<String>, style: DiamondStyle) -> Self {
        Self {
            center,
            region: region.into(),
            style,
        }
    }

    /// Center of the marker.
    pub fn center(&self) -> GeoPoint2d {
        self.center
    }

    /// Region the marker belongs to.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Style of the marker.
    pub fn style(&self) -> &DiamondStyle {
        &self.style
    }

    /// Vertices in order top, right, bottom, left.
    pub fn vertices(&self) -> [GeoPoint2d; 4] {
        let size = self.style.base_size;
        let (lat, lon) = (self.center.lat(), self.center.lon());
        [
            GeoPoint2d::latlon(lat + size, lon),
            GeoPoint2d::latlon(lat, lon + size),
            GeoPoint2d::latlon(lat - size, lon),
            GeoPoint2d::latlon(lat, lon - size),
        ]
    }

    /// The four sides of the diamond forming a closed loop.
    pub fn edges(&self, diamond_id: usize) -> [DiamondEdge; 4] {
        let vertices = self.vertices();
        std::array::from_fn(|edge_id| DiamondEdge {
            diamond_id,
            edge_id,
            from: vertices[edge_id],
            to: vertices[(edge_id + 1) % 4],
        })
    }

    /// Direction from this marker to `next` in degrees clockwise from north, used to orient marker icons along
    /// a row of markers.
    pub fn heading_to(&self, next: &DiamondMarker) -> f64 {
        initial_bearing(&self.center, &next.center)
    }

    /// Mercator scale factor at the marker latitude.
    pub fn pixel_scale(&self, tile_size: TileSize) -> f64 {
        mercator_scale_factor(self.center.lat(), tile_size)
    }

    /// Size in screen pixels at the given zoom level of an icon that should cover `ground_meters` on the ground.
    pub fn pixel_size(&self, ground_meters: f64, zoom: f64, tile_size: TileSize) -> f64 {
        ground_meters * self.pixel_scale(tile_size) * 2f64.powf(zoom)
    }
}

/// All markers of a set of [`MarkerGroup`]s.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiamondSet {
    markers: Vec<DiamondMarker>,
}

impl DiamondSet {
    /// Creates markers for every point of every group, in the order of the groups.
    pub fn from_groups(groups: &[MarkerGroup]) -> Self {
        let markers: Vec<_> = groups
            .iter()
            .flat_map(|group| {
                group
                    .points
                    .iter()
                    .map(|point| DiamondMarker::new(*point, group.region.clone(), group.style))
            })
            .collect();

        log::debug!(
            "Created {} diamonds with {} edges from {} groups",
            markers.len(),
            markers.len() * 4,
            groups.len()
        );

        Self { markers }
    }

    /// Markers in the set.
    pub fn markers(&self) -> &[DiamondMarker] {
        &self.markers
    }

    /// Number of markers.
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Returns true if there are no markers.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Edges of all markers.
    pub fn edges(&self) -> impl Iterator<Item = DiamondEdge> + '_ {
        self.markers
            .iter()
            .enumerate()
            .flat_map(|(diamond_id, marker)| marker.edges(diamond_id))
    }

    /// Heading of every marker towards the next marker of the same region.
    ///
    /// The last marker of a region takes the heading of the one before it. A single marker in a region points
    /// north.
    pub fn headings(&self) -> Vec<f64> {
        let mut headings = vec![0.0; self.markers.len()];
        for (index, pair) in self.markers.windows(2).enumerate() {
            if pair[0].region == pair[1].region {
                headings[index] = pair[0].heading_to(&pair[1]);
                headings[index + 1] = headings[index];
            }
        }

        headings
    }
}

#[cfg(feature = "geojson")]
impl DiamondSet {
    /// Edges as GeoJSON line features with `diamondId`, `edgeId`, `region`, `color` and `outlineColor`
    /// properties.
    pub fn to_geojson(&self) -> geojson::FeatureCollection {
        let features = self
            .edges()
            .map(|edge| {
                let marker = &self.markers[edge.diamond_id];
                let mut properties = geojson::JsonObject::new();
                properties.insert("diamondId".into(), edge.diamond_id.into());
                properties.insert("edgeId".into(), edge.edge_id.into());
                properties.insert("region".into(), marker.region.clone().into());
                properties.insert("color".into(), marker.style.color.to_hex().into());
                properties.insert(
                    "outlineColor".into(),
                    marker.style.outline_color.to_hex().into(),
                );

                geojson::Feature {
                    bbox: None,
                    geometry: Some(geojson::Geometry::new(geojson::Value::LineString(vec![
                        vec![edge.from.lon(), edge.from.lat()],
                        vec![edge.to.lon(), edge.to.lat()],
                    ]))),
                    id: None,
                    properties: Some(properties),
                    foreign_members: None,
                }
            })
            .collect();

        geojson::FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }
}
