//! The indexed register file with a hard-wired zero register.

use crate::device::StepDevice;
use crate::error::ModelError;
use lockstep_common::Word;
use serde::{Deserialize, Serialize};

/// Number of registers in the file.
pub const REGISTER_COUNT: usize = 32;

/// Fixed-size storage of 32 words with one synchronous write port and K
/// combinational read ports.
///
/// Register index 0 always reads as zero regardless of prior writes: the
/// mask is an explicit conditional in the read path, so a write to index 0
/// is accepted and committed like any other, then shadowed on every read.
///
/// Writes are synchronous: [`write`](IndexedRegisterFile::write) stages a
/// value that becomes visible only after the next
/// [`tick`](IndexedRegisterFile::tick), the same step boundary every other
/// device advances on. Reads are combinational and reflect the current
/// committed contents.
#[derive(Debug, Clone)]
pub struct IndexedRegisterFile {
    data_width: u32,
    read_ports: usize,
    registers: Vec<Word>,
    /// Write staged for commit at the next tick (last write wins).
    staged: Option<(usize, Word)>,
    /// The value returned for every read of register 0.
    zero: Word,
}

impl IndexedRegisterFile {
    /// Creates a register file with `read_ports` read ports and
    /// `data_width`-bit words, all registers initialized to zero.
    ///
    /// A port count of zero is legal (the file is then write-only). Fails
    /// with [`ModelError::InvalidDataWidth`] for widths outside the
    /// supported range.
    pub fn new(read_ports: usize, data_width: u32) -> Result<Self, ModelError> {
        let zero =
            Word::new(data_width).map_err(|_| ModelError::InvalidDataWidth { width: data_width })?;
        Ok(Self {
            data_width,
            read_ports,
            registers: vec![zero; REGISTER_COUNT],
            staged: None,
            zero,
        })
    }

    /// Returns the word width in bits.
    pub fn data_width(&self) -> u32 {
        self.data_width
    }

    /// Returns the number of read ports.
    pub fn read_ports(&self) -> usize {
        self.read_ports
    }

    /// Stages a synchronous write of `data` to `address`.
    ///
    /// The write commits at the next [`tick`](IndexedRegisterFile::tick);
    /// until then reads observe the previous contents. With `enable` false
    /// nothing is staged and the file is guaranteed unchanged after the next
    /// tick. Staging a second write before the tick replaces the first (the
    /// file has a single write port).
    ///
    /// Address and width are validated even when `enable` is false; a failed
    /// call stages nothing and existing state is untouched.
    pub fn write(&mut self, address: usize, data: Word, enable: bool) -> Result<(), ModelError> {
        if address >= REGISTER_COUNT {
            return Err(ModelError::AddressOutOfRange { address });
        }
        if data.width() != self.data_width {
            return Err(ModelError::WidthMismatch {
                expected: self.data_width,
                found: data.width(),
            });
        }
        if enable {
            self.staged = Some((address, data));
        }
        Ok(())
    }

    /// Reads the current contents of `address` through read port `port`.
    ///
    /// Combinational: reflects committed contents only, never the staged
    /// write. Address 0 always yields zero.
    pub fn read(&self, port: usize, address: usize) -> Result<Word, ModelError> {
        if port >= self.read_ports {
            return Err(ModelError::PortOutOfRange {
                port,
                ports: self.read_ports,
            });
        }
        if address >= REGISTER_COUNT {
            return Err(ModelError::AddressOutOfRange { address });
        }
        if address == 0 {
            return Ok(self.zero);
        }
        Ok(self.registers[address])
    }

    /// Advances one clock cycle, committing the staged write if any.
    pub fn tick(&mut self) {
        if let Some((address, data)) = self.staged.take() {
            self.registers[address] = data;
        }
    }
}

/// One write-port command within a register-file stimulus vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteCommand {
    /// Destination register address.
    pub address: usize,
    /// The value to write.
    pub data: Word,
    /// Write-enable: with this false the command is a no-op.
    pub enable: bool,
}

/// One full stimulus vector for the register file: an optional write command
/// plus one read address per configured read port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegFileInput {
    /// The write-port command for this cycle, if any.
    pub write: Option<WriteCommand>,
    /// One read address per read port, in port order.
    pub reads: Vec<usize>,
}

impl StepDevice for IndexedRegisterFile {
    type Input = RegFileInput;
    type Output = Vec<Word>;

    /// Applies the write command, advances the clock, and returns the
    /// per-port reads of the post-commit contents, so a write followed by a
    /// read of the same address within one step observes the new value.
    ///
    /// # Panics
    ///
    /// Panics if the input references an out-of-range address or supplies a
    /// read-address count different from the configured port count; stimulus
    /// vectors are expected to be constructed in range.
    fn step(&mut self, input: &RegFileInput) -> Vec<Word> {
        assert_eq!(
            input.reads.len(),
            self.read_ports,
            "stimulus supplies {} read addresses for {} ports",
            input.reads.len(),
            self.read_ports
        );
        if let Some(command) = &input.write {
            self.write(command.address, command.data, command.enable)
                .unwrap_or_else(|e| panic!("invalid register-file stimulus: {e}"));
        }
        self.tick();
        input
            .reads
            .iter()
            .enumerate()
            .map(|(port, &address)| {
                self.read(port, address)
                    .unwrap_or_else(|e| panic!("invalid register-file stimulus: {e}"))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(value: i64, width: u32) -> Word {
        Word::from_i64(value, width).unwrap()
    }

    #[test]
    fn invalid_width_rejected() {
        assert_eq!(
            IndexedRegisterFile::new(2, 0).err(),
            Some(ModelError::InvalidDataWidth { width: 0 })
        );
        assert_eq!(
            IndexedRegisterFile::new(2, 65).err(),
            Some(ModelError::InvalidDataWidth { width: 65 })
        );
    }

    #[test]
    fn zero_read_ports_is_legal() {
        let rf = IndexedRegisterFile::new(0, 32).unwrap();
        assert_eq!(rf.read_ports(), 0);
        assert_eq!(
            rf.read(0, 1).err(),
            Some(ModelError::PortOutOfRange { port: 0, ports: 0 })
        );
    }

    #[test]
    fn registers_start_at_zero() {
        let rf = IndexedRegisterFile::new(1, 16).unwrap();
        for address in 0..REGISTER_COUNT {
            assert!(rf.read(0, address).unwrap().is_zero());
        }
    }

    #[test]
    fn write_is_synchronous() {
        let mut rf = IndexedRegisterFile::new(1, 32).unwrap();
        rf.write(5, word(42, 32), true).unwrap();
        // Not visible until the next tick.
        assert_eq!(rf.read(0, 5).unwrap().value(), 0);
        rf.tick();
        assert_eq!(rf.read(0, 5).unwrap().value(), 42);
    }

    #[test]
    fn write_enable_gates_the_write() {
        let mut rf = IndexedRegisterFile::new(1, 32).unwrap();
        rf.write(7, word(99, 32), false).unwrap();
        rf.tick();
        for address in 0..REGISTER_COUNT {
            assert!(rf.read(0, address).unwrap().is_zero());
        }
    }

    #[test]
    fn register_zero_reads_zero_after_write() {
        let mut rf = IndexedRegisterFile::new(2, 32).unwrap();
        rf.write(0, word(123, 32), true).unwrap();
        rf.tick();
        assert_eq!(rf.read(0, 0).unwrap().value(), 0);
        assert_eq!(rf.read(1, 0).unwrap().value(), 0);
    }

    #[test]
    fn last_staged_write_wins() {
        let mut rf = IndexedRegisterFile::new(1, 32).unwrap();
        rf.write(3, word(1, 32), true).unwrap();
        rf.write(4, word(2, 32), true).unwrap();
        rf.tick();
        assert_eq!(rf.read(0, 3).unwrap().value(), 0);
        assert_eq!(rf.read(0, 4).unwrap().value(), 2);
    }

    #[test]
    fn address_range_checked() {
        let mut rf = IndexedRegisterFile::new(1, 32).unwrap();
        assert_eq!(
            rf.write(32, word(1, 32), true).err(),
            Some(ModelError::AddressOutOfRange { address: 32 })
        );
        assert_eq!(
            rf.read(0, 32).err(),
            Some(ModelError::AddressOutOfRange { address: 32 })
        );
        // A failed write stages nothing.
        rf.tick();
        assert!(rf.read(0, 31).unwrap().is_zero());
    }

    #[test]
    fn width_mismatch_checked() {
        let mut rf = IndexedRegisterFile::new(1, 32).unwrap();
        assert_eq!(
            rf.write(1, word(1, 16), true).err(),
            Some(ModelError::WidthMismatch {
                expected: 32,
                found: 16
            })
        );
    }

    #[test]
    fn write_then_read_back_every_register() {
        let mut rf = IndexedRegisterFile::new(2, 32).unwrap();
        for i in 0..REGISTER_COUNT {
            rf.write(i, word(5 * i as i64 + 3, 32), true).unwrap();
            rf.tick();
        }
        for i in 0..REGISTER_COUNT {
            let port = i % 2;
            let expected = if i == 0 { 0 } else { 5 * i as i64 + 3 };
            assert_eq!(rf.read(port, i).unwrap().value(), expected, "address {i}");
        }
    }

    #[test]
    fn step_reads_post_commit_contents() {
        let mut rf = IndexedRegisterFile::new(2, 32).unwrap();
        let outputs = StepDevice::step(
            &mut rf,
            &RegFileInput {
                write: Some(WriteCommand {
                    address: 9,
                    data: word(-7, 32),
                    enable: true,
                }),
                reads: vec![9, 0],
            },
        );
        assert_eq!(outputs, vec![word(-7, 32), word(0, 32)]);
    }

    #[test]
    #[should_panic(expected = "stimulus supplies 1 read addresses for 2 ports")]
    fn step_checks_port_count() {
        let mut rf = IndexedRegisterFile::new(2, 32).unwrap();
        let _ = StepDevice::step(
            &mut rf,
            &RegFileInput {
                write: None,
                reads: vec![0],
            },
        );
    }
}
