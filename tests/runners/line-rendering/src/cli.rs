use math::Vec2D;

use crate::settings::{Format, Settings};

#[derive(clap::Parser, Debug)]
#[command(name = "line-rendering", version, about = "Rasterize a line segment", long_about = None)]
pub struct Arguments {
    /// x coordinate of the first endpoint
    #[arg(allow_negative_numbers = true)]
    x0: i32,

    /// y coordinate of the first endpoint
    #[arg(allow_negative_numbers = true)]
    y0: i32,

    /// x coordinate of the second endpoint
    #[arg(allow_negative_numbers = true)]
    x1: i32,

    /// y coordinate of the second endpoint
    #[arg(allow_negative_numbers = true)]
    y1: i32,

    /// How the plotted pixels should be printed
    #[arg(short, long, value_enum)]
    format: Option<Format>,

    /// Number of empty cells around the grid
    #[arg(short, long)]
    margin: Option<u32>,

    /// Refuse to render grids with more cells than this
    #[arg(long)]
    max_cells: Option<usize>,
}

impl Arguments {
    pub(crate) fn endpoints(&self) -> (Vec2D<i32>, Vec2D<i32>) {
        (Vec2D::new(self.x0, self.y0), Vec2D::new(self.x1, self.y1))
    }

    pub(crate) fn update_settings(self, settings: &mut Settings) {
        if let Some(format) = self.format {
            settings.format = format;
        }

        if let Some(margin) = self.margin {
            settings.margin = margin;
        }

        if let Some(max_cells) = self.max_cells {
            settings.max_cells = max_cells;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Arguments;
    use crate::settings::{Format, Settings};
    use clap::Parser;
    use math::Vec2D;

    #[test]
    fn negative_coordinates() {
        let args = Arguments::try_parse_from(["line-rendering", "-3", "2", "4", "-1"])
            .expect("arguments are valid");

        assert_eq!(args.endpoints(), (Vec2D::new(-3, 2), Vec2D::new(4, -1)));
    }

    #[test]
    fn options_override_defaults() {
        let args = Arguments::try_parse_from([
            "line-rendering",
            "0",
            "0",
            "1",
            "1",
            "--format",
            "list",
            "--margin",
            "0",
        ])
        .expect("arguments are valid");

        let mut settings = Settings::default();
        args.update_settings(&mut settings);

        assert_eq!(settings.format, Format::List);
        assert_eq!(settings.margin, 0);
        assert_eq!(settings.max_cells, Settings::default().max_cells);
    }

    #[test]
    fn missing_endpoint() {
        assert!(Arguments::try_parse_from(["line-rendering", "0", "0", "1"]).is_err());
    }
}
