//! Flux exchange-list report: the face-bucketed send or receive patch
//! IDs, one block per face.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use strata_core::{ConfigError, DiagSink, Level, Rank, SimClock};
use strata_mesh::{ExchangeKind, Face, MeshView};

use crate::error::DiagError;
use crate::report::{create_report, write_report_header};

/// File name for one flux-list report:
/// `<Send|Recv>FluxPatchList_<rank>_<level>[_<label>]`.
pub fn flux_list_file_name(
    kind: ExchangeKind,
    rank: Rank,
    level: Level,
    label: Option<&str>,
) -> String {
    let mut name = format!("{}_{}_{}", kind.file_prefix(), rank, level);
    if let Some(label) = label {
        name.push('_');
        name.push_str(label);
    }
    name
}

/// Serialize the six face blocks of one exchange direction.
///
/// Each face prints `Face = <s>     Length = <NP>` followed by the NP
/// patch IDs on one line and a blank line. A zero-length face keeps the
/// header and an empty ID line.
pub fn render_flux_list<W, M>(
    w: &mut W,
    mesh: &M,
    kind: ExchangeKind,
    clock: SimClock,
    rank: Rank,
    level: Level,
) -> io::Result<()>
where
    W: Write,
    M: MeshView + ?Sized,
{
    write_report_header(w, clock, rank, level)?;

    for face in Face::ALL {
        let list = match kind {
            ExchangeKind::Send => mesh.flux_send_list(level, face),
            ExchangeKind::Recv => mesh.flux_recv_list(level, face),
        };

        writeln!(w, "Face = {}     Length = {}", face, list.len())?;
        for id in list {
            write!(w, "{:5} ", id.0)?;
        }
        writeln!(w)?;
        writeln!(w)?;
    }
    Ok(())
}

/// Write one flux-list report into `dir`, returning the path written.
///
/// Per rank, no communication; purely a read of this rank's own lists.
/// An existing file draws one overwrite warning and is truncated.
///
/// # Errors
///
/// [`ConfigError::LevelOutOfRange`] (as [`DiagError::Config`]) if
/// `level` is not in `[0, level_count - 1)`, returned before any I/O.
/// [`DiagError::Io`] if the file cannot be created or written.
pub fn write_flux_list<M: MeshView + ?Sized>(
    mesh: &M,
    rank: Rank,
    clock: SimClock,
    kind: ExchangeKind,
    level: Level,
    label: Option<&str>,
    dir: &Path,
    diag: &mut DiagSink<'_>,
) -> Result<PathBuf, DiagError> {
    let bound = mesh.level_count().saturating_sub(1);
    if level.0 >= bound {
        return Err(ConfigError::LevelOutOfRange { level: level.0, bound }.into());
    }

    let path = dir.join(flux_list_file_name(kind, rank, level, label));
    let mut file = create_report(&path, diag)?;
    render_flux_list(&mut file, mesh, kind, clock, rank, level)?;
    Ok(path)
}
