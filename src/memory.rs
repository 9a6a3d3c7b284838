use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Word-granular random access at byte addresses. Address validity (bounds)
/// is the implementation's concern; the execution engine propagates failures
/// unmodified.
pub trait Bus {
    fn read_int(&mut self, addr: u32) -> Result<u32>;
    fn write_int(&mut self, addr: u32, val: u32) -> Result<()>;
}

/// Flat memory holding one word per byte address.
#[derive(Clone, Serialize, Deserialize)]
pub struct LinearMemory {
    pub words: Vec<u32>,
}

impl LinearMemory {
    pub fn new(size: usize) -> Self {
        Self {
            words: vec![0; size],
        }
    }

    fn cell(&self, addr: u32) -> Result<usize> {
        let index = addr as usize;
        if index >= self.words.len() {
            return Err(anyhow!("address {addr:#06x} out of bounds"));
        }
        Ok(index)
    }
}

impl Bus for LinearMemory {
    fn read_int(&mut self, addr: u32) -> Result<u32> {
        let index = self.cell(addr)?;
        Ok(self.words[index])
    }

    fn write_int(&mut self, addr: u32, val: u32) -> Result<()> {
        let index = self.cell(addr)?;
        self.words[index] = val;
        Ok(())
    }
}
