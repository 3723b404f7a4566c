//! Map overlay: a world map cropped around the route, the great-circle
//! path between the airports, and the flown part of it.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Circle, Context, Line as CanvasLine, Map, MapResolution},
        Block, Widget,
    },
};

use crate::core::geo::{great_circle, partial_path, point_along, Coordinate, MapViewport};
use crate::core::progress::clamp_fraction;

use super::theme::Theme;

/// Number of geodesic segments drawn for a route.
const PATH_SEGMENTS: usize = 64;

/// Minimum padding (degrees) around the route.
const MIN_PADDING: f64 = 3.0;

/// The map widget, created fresh each frame.
pub struct FlightMap<'a> {
    start: Coordinate,
    end: Coordinate,
    fraction: f64,
    color: Color,
    block: Option<Block<'a>>,
}

impl<'a> FlightMap<'a> {
    pub fn new(start: Coordinate, end: Coordinate, fraction: f64) -> Self {
        Self {
            start,
            end,
            fraction: clamp_fraction(fraction),
            color: Theme::map_route_color(),
            block: None,
        }
    }

    /// Colour of the flown segment and the aircraft marker.
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// Viewport that holds the whole geodesic, padded by a tenth of its span.
    pub fn viewport(&self, path: &[Coordinate]) -> MapViewport {
        let (mut low, mut high) = (self.start, self.start);
        for p in path {
            low.latitude = low.latitude.min(p.latitude);
            low.longitude = low.longitude.min(p.longitude);
            high.latitude = high.latitude.max(p.latitude);
            high.longitude = high.longitude.max(p.longitude);
        }
        let span = (high.latitude - low.latitude).max(high.longitude - low.longitude);
        MapViewport::enclosing(low, high, (span * 0.1).max(MIN_PADDING))
    }
}

fn draw_polyline(ctx: &mut Context<'_>, points: &[Coordinate], color: Color) {
    for pair in points.windows(2) {
        // Skip the wrap-around segment when a route crosses the antimeridian.
        if (pair[0].longitude - pair[1].longitude).abs() > 180.0 {
            continue;
        }
        ctx.draw(&CanvasLine::new(
            pair[0].longitude,
            pair[0].latitude,
            pair[1].longitude,
            pair[1].latitude,
            color,
        ));
    }
}

impl<'a> Widget for FlightMap<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let path = great_circle(self.start, self.end, PATH_SEGMENTS);
        let flown = partial_path(&path, self.fraction);
        let plane = point_along(self.start, self.end, self.fraction);
        let viewport = self.viewport(&path);
        let radius = ((viewport.x_bounds[1] - viewport.x_bounds[0]) * 0.01).max(0.2);

        let mut canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds(viewport.x_bounds)
            .y_bounds(viewport.y_bounds)
            .paint(|ctx| {
                ctx.draw(&Map {
                    color: Theme::map_land_color(),
                    resolution: MapResolution::High,
                });
                ctx.layer();
                draw_polyline(ctx, &path, Theme::map_track_color());
                draw_polyline(ctx, &flown, self.color);
                for airport in [self.start, self.end] {
                    ctx.draw(&Circle {
                        x: airport.longitude,
                        y: airport.latitude,
                        radius,
                        color: Theme::map_airport_color(),
                    });
                }
                ctx.print(plane.longitude, plane.latitude, "✈");
            });
        if let Some(block) = self.block {
            canvas = canvas.block(block);
        }
        canvas.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn knoxville() -> Coordinate {
        Coordinate::new(35.655, -83.4411)
    }

    fn las_vegas() -> Coordinate {
        Coordinate::new(36.084, -115.1537)
    }

    #[test]
    fn viewport_contains_the_whole_route() {
        let map = FlightMap::new(knoxville(), las_vegas(), 0.67);
        let path = great_circle(knoxville(), las_vegas(), PATH_SEGMENTS);
        let view = map.viewport(&path);
        for p in &path {
            assert!(view.x_bounds[0] < p.longitude && p.longitude < view.x_bounds[1]);
            assert!(view.y_bounds[0] < p.latitude && p.latitude < view.y_bounds[1]);
        }
    }

    #[test]
    fn short_hop_still_gets_padding() {
        let a = Coordinate::new(35.0, -83.0);
        let b = Coordinate::new(35.1, -83.1);
        let view = FlightMap::new(a, b, 0.0).viewport(&great_circle(a, b, 4));
        assert!(view.x_bounds[1] - view.x_bounds[0] >= 2.0 * MIN_PADDING);
    }

    #[test]
    fn renders_title_and_plane() {
        let area = Rect::new(0, 0, 40, 16);
        let mut buf = Buffer::empty(area);
        FlightMap::new(knoxville(), las_vegas(), 0.5)
            .block(Block::bordered().title(" Route "))
            .render(area, &mut buf);

        let text: String = (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .map(|(x, y)| buf[(x, y)].symbol().to_string())
            .collect();
        assert!(text.contains("Route"));
        assert!(text.contains('✈'));
    }

    #[test]
    fn empty_area_is_a_no_op() {
        let area = Rect::new(0, 0, 0, 0);
        let mut buf = Buffer::empty(area);
        FlightMap::new(knoxville(), las_vegas(), 0.5).render(area, &mut buf);
    }
}
