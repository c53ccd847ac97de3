//! Exchange patch-map report: which patch slots are scheduled to send
//! or receive patch data, rendered as ASCII slices along one axis.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use strata_core::{ConfigError, DiagSink, Level, Rank, SimClock};
use strata_mesh::{Axis, Dir26, MeshView};

use crate::error::DiagError;
use crate::occupancy::{grid_dims, patch_slot, CellMark, OccupancyMap, SliceAxes};
use crate::report::{create_report, write_report_header};

/// File name for one patch-map report:
/// `ExchangePatchMap_<rank>_<level>_<plane>[_<label>]`.
pub fn patch_map_file_name(rank: Rank, level: Level, axis: Axis, label: Option<&str>) -> String {
    let mut name = format!("ExchangePatchMap_{}_{}_{}", rank, level, axis.plane());
    if let Some(label) = label {
        name.push('_');
        name.push_str(label);
    }
    name
}

/// Build the occupancy grid for `level` from the 26-way patch exchange
/// lists.
///
/// Send slots are marked first, then receive slots. A second receive
/// claim on one slot is a broken exchange list: it is reported on the
/// err stream and the latest marker kept. A send marker overwritten by
/// a receive is replaced silently — the lists are read as-is, never
/// corrected.
pub fn build_occupancy<M: MeshView + ?Sized>(
    mesh: &M,
    rank: Rank,
    level: Level,
    diag: &mut DiagSink<'_>,
) -> OccupancyMap {
    let mut map = OccupancyMap::new(grid_dims(mesh, level));

    for dir in Dir26::all() {
        for &id in mesh.patch_send_list(level, dir) {
            let at = patch_slot(mesh, level, mesh.patch_corner(level, id));
            map.mark(at, CellMark::Send);
        }
    }

    for dir in Dir26::all() {
        for (p, &id) in mesh.patch_recv_list(level, dir).iter().enumerate() {
            let at = patch_slot(mesh, level, mesh.patch_corner(level, id));
            if map.mark(at, CellMark::Recv) == CellMark::Recv {
                let _ = writeln!(
                    diag.err(),
                    "WARNING : repeated ID (Rank = {}, P = {}, (ip, jp, kp) = ({},{},{})) !!",
                    rank, p, at[0], at[1], at[2]
                );
            }
        }
    }

    map
}

/// Serialize the occupancy grid slice by slice along `axis`.
///
/// Each slice prints its fixed-axis label and index, a blank line, then
/// the 2D character grid with rows in descending index order and every
/// marker preceded by two spaces. Output is deterministic in the grid
/// contents.
pub fn render_patch_map<W: Write>(
    w: &mut W,
    map: &OccupancyMap,
    axis: Axis,
    clock: SimClock,
    rank: Rank,
    level: Level,
) -> io::Result<()> {
    write_report_header(w, clock, rank, level)?;

    let roles = SliceAxes::for_axis(axis);
    let dims = map.dims();
    let slice_end = dims[roles.slice.index()];
    let row_end = dims[roles.row.index()];
    let col_end = dims[roles.col.index()];

    for s in 0..slice_end {
        writeln!(w, "{} = {}", axis.letter(), s)?;
        writeln!(w)?;
        for r in (0..row_end).rev() {
            for c in 0..col_end {
                write!(w, "  {}", map.get(roles.compose(s, r, c)).glyph())?;
            }
            writeln!(w)?;
        }
        writeln!(w)?;
        writeln!(w)?;
        writeln!(w)?;
    }
    Ok(())
}

/// Write one patch-map report into `dir`, returning the path written.
///
/// Per rank, no communication. Re-invoking with unchanged inputs
/// overwrites the same file with byte-identical content, preceded by
/// exactly one overwrite warning.
///
/// # Errors
///
/// [`ConfigError::LevelOutOfRange`] (as [`DiagError::Config`]) if
/// `level` is not in `[0, level_count - 1)` — exchange lists only exist
/// between adjacent levels — returned before any allocation or I/O.
/// [`DiagError::Io`] if the file cannot be created or written.
pub fn write_patch_map<M: MeshView + ?Sized>(
    mesh: &M,
    rank: Rank,
    clock: SimClock,
    level: Level,
    axis: Axis,
    label: Option<&str>,
    dir: &Path,
    diag: &mut DiagSink<'_>,
) -> Result<PathBuf, DiagError> {
    let bound = mesh.level_count().saturating_sub(1);
    if level.0 >= bound {
        return Err(ConfigError::LevelOutOfRange { level: level.0, bound }.into());
    }

    let map = build_occupancy(mesh, rank, level, diag);
    let path = dir.join(patch_map_file_name(rank, level, axis, label));
    let mut file = create_report(&path, diag)?;
    render_patch_map(&mut file, &map, axis, clock, rank, level)?;
    Ok(path)
}
