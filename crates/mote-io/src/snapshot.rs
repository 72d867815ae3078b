//! Binary state snapshots.
//!
//! A snapshot is the raw little-endian bytes of the position vector
//! immediately followed by the raw bytes of the velocity vector, each
//! `2 × particle_count` scalars. No header, no length prefix: the reader
//! must already know the scene size, and a short read is fatal.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use mote_scene::Scene;
use mote_types::{MoteError, MoteResult, Scalar};

const SCALAR_BYTES: usize = std::mem::size_of::<Scalar>();

/// Writes one snapshot of `scene`'s position and velocity state.
pub fn write_snapshot(scene: &Scene, writer: &mut impl Write) -> MoteResult<()> {
    write_vector(scene.positions(), writer)?;
    write_vector(scene.velocities(), writer)?;
    Ok(())
}

/// Reads one snapshot into `scene`, which must already be sized to match.
///
/// A short read is an unrecoverable [`MoteError::Snapshot`]: the format
/// carries no resynchronization points.
pub fn read_snapshot(scene: &mut Scene, reader: &mut impl Read) -> MoteResult<()> {
    let n2 = scene.num_dofs();
    let mut positions = vec![0.0; n2];
    let mut velocities = vec![0.0; n2];
    read_vector(&mut positions, reader)?;
    read_vector(&mut velocities, reader)?;

    scene.positions_mut().copy_from_slice(&positions);
    scene.velocities_mut().copy_from_slice(&velocities);
    Ok(())
}

fn write_vector(values: &[Scalar], writer: &mut impl Write) -> MoteResult<()> {
    for &value in values {
        writer.write_all(&value.to_le_bytes())?;
    }
    Ok(())
}

fn read_vector(values: &mut [Scalar], reader: &mut impl Read) -> MoteResult<()> {
    let mut bytes = vec![0u8; values.len() * SCALAR_BYTES];
    reader.read_exact(&mut bytes).map_err(|e| match e.kind() {
        std::io::ErrorKind::UnexpectedEof => MoteError::Snapshot(format!(
            "snapshot ended early: expected {} state bytes",
            bytes.len()
        )),
        _ => MoteError::Io(e),
    })?;

    for (i, chunk) in bytes.chunks_exact(SCALAR_BYTES).enumerate() {
        let mut raw = [0u8; SCALAR_BYTES];
        raw.copy_from_slice(chunk);
        values[i] = Scalar::from_le_bytes(raw);
    }
    Ok(())
}

/// Streaming writer that appends one snapshot frame per step to a file.
pub struct SnapshotWriter {
    writer: BufWriter<File>,
    frames: u32,
}

impl SnapshotWriter {
    /// Creates (truncates) the output file.
    pub fn create(path: &Path) -> MoteResult<Self> {
        Ok(Self {
            writer: BufWriter::new(File::create(path)?),
            frames: 0,
        })
    }

    /// Appends the scene's current state as one frame.
    pub fn write_frame(&mut self, scene: &Scene) -> MoteResult<()> {
        write_snapshot(scene, &mut self.writer)?;
        self.frames += 1;
        Ok(())
    }

    /// Number of frames written so far.
    pub fn frame_count(&self) -> u32 {
        self.frames
    }

    /// Flushes buffered frames to disk.
    pub fn finish(mut self) -> MoteResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Streaming reader over a multi-frame snapshot file.
pub struct SnapshotReader<R: Read> {
    reader: R,
}

impl SnapshotReader<std::io::BufReader<File>> {
    /// Opens a snapshot file for frame-by-frame reading.
    pub fn open(path: &Path) -> MoteResult<Self> {
        Ok(Self {
            reader: std::io::BufReader::new(File::open(path)?),
        })
    }
}

impl<R: Read> SnapshotReader<R> {
    /// Wraps any reader producing concatenated frames.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Reads the next frame into `scene`.
    ///
    /// Returns `Ok(false)` on a clean end of stream (no bytes left), and
    /// [`MoteError::Snapshot`] when a frame is cut off partway.
    pub fn next_frame(&mut self, scene: &mut Scene) -> MoteResult<bool> {
        let n2 = scene.num_dofs();
        let mut bytes = vec![0u8; 2 * n2 * SCALAR_BYTES];
        if bytes.is_empty() {
            // Zero-particle frames are indistinguishable from EOF.
            return Ok(false);
        }

        let mut filled = 0;
        while filled < bytes.len() {
            let read = self.reader.read(&mut bytes[filled..])?;
            if read == 0 {
                break;
            }
            filled += read;
        }

        if filled == 0 {
            return Ok(false);
        }
        if filled < bytes.len() {
            return Err(MoteError::Snapshot(format!(
                "truncated frame: got {filled} of {} bytes",
                bytes.len()
            )));
        }

        decode_frame(&bytes, scene);
        Ok(true)
    }
}

fn decode_frame(bytes: &[u8], scene: &mut Scene) {
    let n2 = scene.num_dofs();
    let mut decode = |target: &mut [Scalar], offset: usize| {
        for (i, value) in target.iter_mut().enumerate() {
            let at = (offset + i) * SCALAR_BYTES;
            let mut raw = [0u8; SCALAR_BYTES];
            raw.copy_from_slice(&bytes[at..at + SCALAR_BYTES]);
            *value = Scalar::from_le_bytes(raw);
        }
    };
    decode(scene.positions_mut(), 0);
    decode(scene.velocities_mut(), n2);
}
