//! Human-readable memory-map dumps.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use lacuna_core::Hole;

/// Render a hole list as `[offset, length] - [offset, length] - ...`.
///
/// Holes are rendered in the order given; the pool's hole export is
/// already offset-ordered. An empty hole list renders as an empty
/// string.
pub fn render_map(holes: &[Hole]) -> String {
    holes
        .iter()
        .map(Hole::to_string)
        .collect::<Vec<_>>()
        .join(" - ")
}

/// Write the rendered memory map to a caller-supplied destination.
///
/// Write failures are returned to the caller, never swallowed.
pub fn write_map<W: Write>(holes: &[Hole], writer: &mut W) -> io::Result<()> {
    writer.write_all(render_map(holes).as_bytes())
}

/// Create (or truncate) `path` and write the rendered memory map to it.
pub fn write_map_to_path<P: AsRef<Path>>(holes: &[Hole], path: P) -> io::Result<()> {
    let mut file = File::create(path)?;
    write_map(holes, &mut file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_holes_in_given_order_with_dash_separator() {
        let holes = [Hole::new(0, 4), Hole::new(10, 2), Hole::new(20, 10)];
        assert_eq!(render_map(&holes), "[0, 4] - [10, 2] - [20, 10]");
    }

    #[test]
    fn single_hole_has_no_separator() {
        assert_eq!(render_map(&[Hole::new(0, 16)]), "[0, 16]");
    }

    #[test]
    fn empty_hole_list_renders_empty() {
        assert_eq!(render_map(&[]), "");
    }

    #[test]
    fn write_map_writes_the_rendered_bytes() {
        let holes = [Hole::new(2, 2), Hole::new(6, 4)];
        let mut out = Vec::new();
        write_map(&holes, &mut out).unwrap();
        assert_eq!(out, b"[2, 2] - [6, 4]");
    }

    #[test]
    fn write_failures_reach_the_caller() {
        struct FailingWriter;

        impl Write for FailingWriter {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let result = write_map(&[Hole::new(0, 1)], &mut FailingWriter);
        assert!(result.is_err());
    }

    #[test]
    fn write_map_to_path_round_trips_through_a_file() {
        let path = std::env::temp_dir().join(format!("lacuna-map-{}.txt", std::process::id()));
        write_map_to_path(&[Hole::new(0, 4), Hole::new(10, 2)], &path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "[0, 4] - [10, 2]");
        std::fs::remove_file(&path).unwrap();
    }
}
