//! Distributed finiteness validation of per-cell simulation state.

use std::io::Write;

use smallvec::SmallVec;

use strata_comm::{ordered_visit, Communicator};
use strata_core::{ConfigError, DiagSink, Level, PatchId, Rank, SimClock};
use strata_mesh::MeshView;

/// Verify that every scalar this rank owns at `level` is finite,
/// reporting across the whole group in strict ascending rank order.
///
/// Each rank scans its patches' current-slot fluid components (plus the
/// potential scalar when the run has gravity coupling) cell by cell.
/// The first failing scalar found while the running verdict is still
/// passing prints a one-time header on the err stream; every failing
/// scalar prints one table row with the rank, patch, global cell
/// coordinate, and component index. Because the verdict is carried from
/// rank to rank, the header appears exactly once globally.
///
/// Collective: every rank must call this with identical arguments.
/// Costs exactly `2 * rank_count` collective operations regardless of
/// data size. On global pass, rank 0 alone prints one confirmation
/// line and `Ok(())` is returned everywhere. On global failure the
/// entire process group is aborted after the full ordered report — this
/// function then never returns.
///
/// `label` names the call site and appears in the header lines.
///
/// # Errors
///
/// [`ConfigError::LevelOutOfRange`] if `level` is not in
/// `[0, level_count)`, returned before any I/O or communication.
pub fn check_finite<M, C>(
    mesh: &M,
    comm: &C,
    clock: SimClock,
    level: Level,
    label: &str,
    diag: &mut DiagSink<'_>,
) -> Result<(), ConfigError>
where
    M: MeshView + ?Sized,
    C: Communicator + ?Sized,
{
    let bound = mesh.level_count();
    if level.0 >= bound {
        return Err(ConfigError::LevelOutOfRange { level: level.0, bound });
    }

    let rank = comm.rank();
    let verdict = ordered_visit(comm, |pass| {
        scan_rank(mesh, rank, clock, level, label, pass, diag)
    });

    if verdict {
        if rank == Rank(0) {
            let _ = writeln!(
                diag.out(),
                "\"{}\" : <check_finite> PASSED at level {:2}, Time = {:13.7e}, Step = {}",
                label, level.0, clock.time, clock.step
            );
        }
        Ok(())
    } else {
        comm.abort(1)
    }
}

/// Scan this rank's patches, printing a row per non-finite scalar.
/// Returns the verdict after this rank's turn.
///
/// Stream write failures are deliberately ignored: a broken stderr must
/// not make one rank desert the collective broadcast/barrier sequence.
fn scan_rank<M: MeshView + ?Sized>(
    mesh: &M,
    rank: Rank,
    clock: SimClock,
    level: Level,
    label: &str,
    mut pass: bool,
    diag: &mut DiagSink<'_>,
) -> bool {
    let n = mesh.patch_cells() as usize;
    let ncomp = mesh.fluid_components();
    let scale = mesh.cell_scale(level);
    let flu_slot = mesh.fluid_slot(level);
    let pot_slot = mesh.potential_slot(level);

    let mut data: SmallVec<[f64; 8]> = SmallVec::new();

    for p in 0..mesh.patch_count(level) {
        let id = PatchId(p as u32);
        let corner = mesh.patch_corner(level, id);
        let fields: SmallVec<[&[f64]; 8]> = (0..ncomp)
            .map(|v| mesh.fluid_field(flu_slot, level, id, v))
            .collect();
        let potential = mesh.potential_field(pot_slot, level, id);

        for k in 0..n {
            for j in 0..n {
                for i in 0..n {
                    let cell = (k * n + j) * n + i;
                    data.clear();
                    for field in &fields {
                        data.push(field[cell]);
                    }
                    if let Some(pot) = potential {
                        data.push(pot[cell]);
                    }

                    for (v, value) in data.iter().enumerate() {
                        if value.is_finite() {
                            continue;
                        }
                        if pass {
                            let _ = writeln!(
                                diag.err(),
                                "\"{}\" : <check_finite> FAILED at level {:2}, \
                                 Time = {:13.7e}, Step = {} !!",
                                label, level.0, clock.time, clock.step
                            );
                            let _ = writeln!(
                                diag.err(),
                                "{:>4}\t{:>7}\t\t{:>19}\t{:>8}",
                                "Rank", "PatchID", "Coordinate", "Variable"
                            );
                            pass = false;
                        }
                        let coord = format!(
                            "({:5},{:5},{:5})",
                            i as i32 * scale + corner[0],
                            j as i32 * scale + corner[1],
                            k as i32 * scale + corner[2]
                        );
                        let _ = writeln!(
                            diag.err(),
                            "{:>4}\t{:>7}\t\t{:>19}\t{:>8}",
                            rank.0, id.0, coord, v
                        );
                    }
                }
            }
        }
    }

    pass
}
