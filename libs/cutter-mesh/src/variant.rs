//! # Variant Table
//!
//! Flat decision table from `(profile, radial, frame, frame_curved)` to the
//! shell kind that builds it. Every combination a [`CutterParameters`] can
//! hold has exactly one row.

use crate::error::{MeshError, MeshResult};
use crate::params::{CutterParameters, Profile};
use crate::shell::{self, Generator, Shell, ShellContext, Stitcher};

/// Topology family of a single shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShellKind {
    /// Solid rectangular box
    Box,
    /// Rectangular picture frame
    BoxFrame,
    /// Solid elliptic cylinder
    Cylinder,
    /// Square-section ring around an ellipse
    CylinderFrame,
    /// Round-section ring around an ellipse
    Torus,
    /// Solid wave wall
    WaveWall,
    /// Two square-section wave rails
    WaveRails,
    /// Two round-section wave rails
    WaveTubes,
}

impl ShellKind {
    /// Vertex generator of this kind.
    pub fn generator(self) -> Generator {
        match self {
            ShellKind::Box => shell::box_vertices,
            ShellKind::BoxFrame => shell::box_frame_vertices,
            ShellKind::Cylinder => shell::cylinder_vertices,
            ShellKind::CylinderFrame => shell::cylinder_frame_vertices,
            ShellKind::Torus => shell::torus_vertices,
            ShellKind::WaveWall => shell::wave_wall_vertices,
            ShellKind::WaveRails => shell::wave_rails_vertices,
            ShellKind::WaveTubes => shell::wave_tubes_vertices,
        }
    }

    /// Face stitcher of this kind.
    pub fn stitcher(self) -> Stitcher {
        match self {
            ShellKind::Box => shell::box_stitch,
            ShellKind::BoxFrame => shell::box_frame_stitch,
            ShellKind::Cylinder => shell::cylinder_stitch,
            ShellKind::CylinderFrame => shell::cylinder_frame_stitch,
            ShellKind::Torus => shell::torus_stitch,
            ShellKind::WaveWall => shell::wave_wall_stitch,
            ShellKind::WaveRails => shell::wave_rails_stitch,
            ShellKind::WaveTubes => shell::wave_tubes_stitch,
        }
    }

    /// Builds one shell of this kind.
    pub fn build(self, ctx: &ShellContext<'_>) -> MeshResult<Shell> {
        Shell::build(ctx, self.generator(), self.stitcher())
    }
}

/// One row of the variant table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variant {
    /// Profile family
    pub profile: Profile,
    /// Radial duplication flag
    pub radial: bool,
    /// Frame flag
    pub frame: bool,
    /// Curved frame flag
    pub frame_curved: bool,
    /// Shell built for this row
    pub kind: ShellKind,
}

const fn row(
    profile: Profile,
    radial: bool,
    frame: bool,
    frame_curved: bool,
    kind: ShellKind,
) -> Variant {
    Variant {
        profile,
        radial,
        frame,
        frame_curved,
        kind,
    }
}

use Profile::{Ellipse, Rectangle, Wave};
use ShellKind::{BoxFrame, Cylinder, CylinderFrame, Torus, WaveRails, WaveTubes, WaveWall};

/// The full variant table: 4 rectangle rows, 8 ellipse rows, 8 wave rows.
///
/// A curved frame flag without the frame flag selects the solid shell.
pub const VARIANTS: [Variant; 20] = [
    //   profile    radial frame  curved kind
    row(Rectangle, false, false, false, ShellKind::Box),
    row(Rectangle, false, true, false, BoxFrame),
    row(Rectangle, true, false, false, ShellKind::Box),
    row(Rectangle, true, true, false, BoxFrame),
    row(Ellipse, false, false, false, Cylinder),
    row(Ellipse, false, false, true, Cylinder),
    row(Ellipse, false, true, false, CylinderFrame),
    row(Ellipse, false, true, true, Torus),
    row(Ellipse, true, false, false, Cylinder),
    row(Ellipse, true, false, true, Cylinder),
    row(Ellipse, true, true, false, CylinderFrame),
    row(Ellipse, true, true, true, Torus),
    row(Wave, false, false, false, WaveWall),
    row(Wave, false, false, true, WaveWall),
    row(Wave, false, true, false, WaveRails),
    row(Wave, false, true, true, WaveTubes),
    row(Wave, true, false, false, WaveWall),
    row(Wave, true, false, true, WaveWall),
    row(Wave, true, true, false, WaveRails),
    row(Wave, true, true, true, WaveTubes),
];

/// Looks up the row matching the parameters' flags.
///
/// # Errors
///
/// Returns [`MeshError::InvalidParameter`] when no row matches, which only
/// happens for a rectangle carrying a curved frame.
pub fn select_variant(params: &CutterParameters) -> MeshResult<&'static Variant> {
    VARIANTS
        .iter()
        .find(|v| {
            v.profile == params.profile()
                && v.radial == params.radial()
                && v.frame == params.frame()
                && v.frame_curved == params.frame_curved()
        })
        .ok_or_else(|| {
            MeshError::invalid_parameter(
                "frame_curved",
                format!("no variant for {:?} with a curved frame", params.profile()),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_keys_are_unique() {
        let keys: HashSet<_> = VARIANTS
            .iter()
            .map(|v| (v.profile, v.radial, v.frame, v.frame_curved))
            .collect();
        assert_eq!(keys.len(), VARIANTS.len());
    }

    #[test]
    fn test_rows_per_profile() {
        let count = |p: Profile| VARIANTS.iter().filter(|v| v.profile == p).count();
        assert_eq!(count(Rectangle), 4);
        assert_eq!(count(Ellipse), 8);
        assert_eq!(count(Wave), 8);
        assert!(VARIANTS
            .iter()
            .all(|v| !(v.profile == Rectangle && v.frame_curved)));
    }

    #[test]
    fn test_every_reachable_combination_has_a_row() {
        for profile in Profile::ALL {
            for radial in [false, true] {
                for frame in [false, true] {
                    for curved in [false, true] {
                        let params = CutterParameters::new(profile)
                            .with_radial(radial)
                            .with_frame(frame)
                            .with_frame_curved(curved);
                        let variant = select_variant(&params).unwrap();
                        assert_eq!(variant.radial, radial);
                        assert_eq!(variant.frame, frame);
                    }
                }
            }
        }
    }

    #[test]
    fn test_radial_does_not_change_kind() {
        for v in VARIANTS.iter().filter(|v| v.radial) {
            let twin = VARIANTS
                .iter()
                .find(|w| {
                    !w.radial
                        && w.profile == v.profile
                        && w.frame == v.frame
                        && w.frame_curved == v.frame_curved
                })
                .unwrap();
            assert_eq!(twin.kind, v.kind);
        }
    }

    #[test]
    fn test_curved_frame_selects_round_sections() {
        let torus = CutterParameters::new(Ellipse)
            .with_frame(true)
            .with_frame_curved(true);
        assert_eq!(select_variant(&torus).unwrap().kind, Torus);

        let tubes = CutterParameters::new(Wave)
            .with_frame(true)
            .with_frame_curved(true);
        assert_eq!(select_variant(&tubes).unwrap().kind, WaveTubes);
    }
}
