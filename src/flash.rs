//! # Flash programming
//!
//! The raw flash controller is an external collaborator, described here by the [`FlashController`] trait. On top of
//! it sit the two sequences the configuration store needs:
//!
//! - Program: unlock, clear the error flags, write the data one program unit at a time waiting for the controller
//!   after every unit, then lock again. Any error flag aborts the sequence, the controller is always left locked.
//! - Erase: unlock, clear the error flags, erase one page, wait for the controller, lock.
//!
//! [`SimulatedFlash`] is an in-memory controller which behaves like the real part closely enough to exercise the
//! store on a host: it refuses to program while locked or over bytes that aren't erased, reports busy for a few polls
//! after every operation, counts erases per page and can be told to fail.

use crate::error::FlashError;

/// The smallest unit the controller can program, in bytes
pub const WRITE_BLOCK_SIZE: usize = 8;

/// The value of every byte of a freshly erased page
pub const ERASED_BYTE: u8 = 0xFF;

/// The number of busy polls after which an operation is considered hung
pub const MAX_BUSY_POLLS: u32 = 1_000_000;

/// The location and shape of the pool of flash pages reserved for configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StoreLayout {
    /// Address of page zero
    pub flash_base: u32,

    /// Number of the first page in the pool
    pub first_page: u32,

    /// Size of one erase page in bytes
    pub page_size: u32,

    /// Number of consecutive pages in the pool
    pub page_count: usize,
}

impl StoreLayout {
    /// 20 pages of 2 KiB at the top of a 256 KiB part
    pub const REFERENCE: StoreLayout = StoreLayout {
        flash_base: 0x0800_0000,
        first_page: 99,
        page_size: 2048,
        page_count: 20,
    };

    /// `layout.page_address(p)` is the address of the first byte of page `p`
    pub fn page_address(&self, page: u32) -> u32 {
        self.flash_base + page * self.page_size
    }

    /// `layout.pages()` is every page number in the pool, in ascending order
    pub fn pages(&self) -> impl Iterator<Item = u32> {
        self.first_page..self.first_page + self.page_count as u32
    }

    /// `layout.contains_page(p)` is true iff page `p` belongs to the pool
    pub fn contains_page(&self, page: u32) -> bool {
        self.first_page <= page && page < self.first_page + self.page_count as u32
    }
}

/// The controller status flags the sequences care about
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FlashStatus {
    /// An operation is still in progress
    pub busy: bool,

    /// Any of the controller's error flags is set
    pub error: bool,
}

/// The raw register level operations of a flash controller
pub trait FlashController {
    /// Unlock the control register for programming and erasing
    fn unlock(&mut self);

    /// Lock the control register
    fn lock(&mut self);

    /// Clear every error flag
    fn clear_errors(&mut self);

    /// Poll the status flags
    fn status(&mut self) -> FlashStatus;

    /// Start programming one unit at `address`, which is aligned to the unit size
    fn start_program(&mut self, address: u32, unit: &[u8; WRITE_BLOCK_SIZE]);

    /// Start erasing page `page`
    fn start_erase(&mut self, page: u32);

    /// Read `buf.len()` bytes starting at `address`
    fn read(&mut self, address: u32, buf: &mut [u8]);
}

/// `wait_for_last_operation(c)` waits for the controller to go idle, reporting and clearing any error flags
pub fn wait_for_last_operation<C: FlashController>(ctrl: &mut C) -> Result<(), FlashError> {
    for _ in 0..MAX_BUSY_POLLS {
        let status = ctrl.status();
        if status.error {
            ctrl.clear_errors();
            return Err(FlashError::Hardware);
        }
        if !status.busy {
            return Ok(());
        }
    }
    Err(FlashError::Timeout)
}

/// `program(c, addr, data)` programs `data` starting at `addr`
///
/// The last unit is padded with erased bytes. The controller is locked again whatever the outcome.
pub fn program<C: FlashController>(ctrl: &mut C, address: u32, data: &[u8]) -> Result<(), FlashError> {
    ctrl.unlock();
    ctrl.clear_errors();
    let result = program_units(ctrl, address, data);
    ctrl.lock();

    #[cfg(feature = "defmt")]
    if let Err(e) = result {
        defmt::error!("flash program at {=u32:#x} failed: {}", address, e);
    }

    result
}

fn program_units<C: FlashController>(ctrl: &mut C, address: u32, data: &[u8]) -> Result<(), FlashError> {
    wait_for_last_operation(ctrl)?;

    let mut unit_address = address;
    for chunk in data.chunks(WRITE_BLOCK_SIZE) {
        let mut unit = [ERASED_BYTE; WRITE_BLOCK_SIZE];
        unit[..chunk.len()].copy_from_slice(chunk);

        ctrl.start_program(unit_address, &unit);
        wait_for_last_operation(ctrl)?;

        unit_address += WRITE_BLOCK_SIZE as u32;
    }
    Ok(())
}

/// `erase_page(c, p)` erases page `p`, the controller is locked again whatever the outcome
pub fn erase_page<C: FlashController>(ctrl: &mut C, page: u32) -> Result<(), FlashError> {
    ctrl.unlock();
    ctrl.clear_errors();
    let result = wait_for_last_operation(ctrl).and_then(|_| {
        ctrl.start_erase(page);
        wait_for_last_operation(ctrl)
    });
    ctrl.lock();

    #[cfg(feature = "defmt")]
    if let Err(e) = result {
        defmt::error!("flash erase of page {} failed: {}", page, e);
    }

    result
}

/// An in-memory flash controller covering just the configuration pool is represented here
pub struct SimulatedFlash<const PAGE_SIZE: usize, const PAGE_COUNT: usize> {
    flash_base: u32,
    first_page: u32,
    memory: [[u8; PAGE_SIZE]; PAGE_COUNT],

    locked: bool,
    error: bool,

    /// Polls left before the current operation completes
    busy_polls: u32,

    /// Polls every operation stays busy for
    busy_per_operation: u32,

    units_programmed: usize,
    erase_counts: [u32; PAGE_COUNT],

    /// Refuse every program after this many successful units
    fail_program_after: Option<usize>,

    /// Refuse every erase
    fail_erase: bool,
}

impl<const PAGE_SIZE: usize, const PAGE_COUNT: usize> SimulatedFlash<PAGE_SIZE, PAGE_COUNT> {
    /// `SimulatedFlash::new(base, first)` is a fully erased, locked pool starting at page `first`
    pub fn new(flash_base: u32, first_page: u32) -> Self {
        Self {
            flash_base,
            first_page,
            memory: [[ERASED_BYTE; PAGE_SIZE]; PAGE_COUNT],
            locked: true,
            error: false,
            busy_polls: 0,
            busy_per_operation: 3,
            units_programmed: 0,
            erase_counts: [0; PAGE_COUNT],
            fail_program_after: None,
            fail_erase: false,
        }
    }

    /// `sim.layout()` is the store layout matching this simulated pool
    pub fn layout(&self) -> StoreLayout {
        StoreLayout {
            flash_base: self.flash_base,
            first_page: self.first_page,
            page_size: PAGE_SIZE as u32,
            page_count: PAGE_COUNT,
        }
    }

    /// `sim.is_locked()` is true iff the control register is locked
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// `sim.units_programmed()` is the number of program units written so far
    pub fn units_programmed(&self) -> usize {
        self.units_programmed
    }

    /// `sim.erase_count(p)` is the number of times page `p` has been erased
    pub fn erase_count(&self, page: u32) -> u32 {
        self.slot(page).map_or(0, |i| self.erase_counts[i])
    }

    /// `sim.page(p)` is the content of page `p`, if it belongs to the pool
    pub fn page(&self, page: u32) -> Option<&[u8; PAGE_SIZE]> {
        self.slot(page).map(|i| &self.memory[i])
    }

    /// `sim.fail_program_after(n)` makes every program fail once `n` more units have been written
    pub fn fail_program_after(&mut self, units: Option<usize>) {
        self.fail_program_after = units.map(|n| self.units_programmed + n);
    }

    /// `sim.fail_erase(f)` makes every erase fail while `f` is true
    pub fn fail_erase(&mut self, fail: bool) {
        self.fail_erase = fail;
    }

    /// `sim.set_busy_polls(n)` sets how many status polls every operation stays busy for
    pub fn set_busy_polls(&mut self, polls: u32) {
        self.busy_per_operation = polls;
    }

    /// `sim.poke(addr, bytes)` overwrites memory directly, bypassing every controller rule
    ///
    /// Used to plant foreign data or the remains of an interrupted write.
    pub fn poke(&mut self, address: u32, bytes: &[u8]) {
        for (i, byte) in bytes.iter().enumerate() {
            if let Some((page, offset)) = self.locate(address + i as u32) {
                self.memory[page][offset] = *byte;
            }
        }
    }

    fn slot(&self, page: u32) -> Option<usize> {
        self.layout()
            .contains_page(page)
            .then(|| (page - self.first_page) as usize)
    }

    fn locate(&self, address: u32) -> Option<(usize, usize)> {
        let pool_start = self.flash_base + self.first_page * PAGE_SIZE as u32;
        let offset = address.checked_sub(pool_start)? as usize;
        let page = offset / PAGE_SIZE;
        (page < PAGE_COUNT).then_some((page, offset % PAGE_SIZE))
    }
}

impl<const PAGE_SIZE: usize, const PAGE_COUNT: usize> FlashController
    for SimulatedFlash<PAGE_SIZE, PAGE_COUNT>
{
    fn unlock(&mut self) {
        self.locked = false;
    }

    fn lock(&mut self) {
        self.locked = true;
    }

    fn clear_errors(&mut self) {
        self.error = false;
    }

    fn status(&mut self) -> FlashStatus {
        let busy = 0 < self.busy_polls;
        self.busy_polls = self.busy_polls.saturating_sub(1);
        FlashStatus {
            busy,
            error: self.error,
        }
    }

    fn start_program(&mut self, address: u32, unit: &[u8; WRITE_BLOCK_SIZE]) {
        let refused = self.locked
            || address as usize % WRITE_BLOCK_SIZE != 0
            || self
                .fail_program_after
                .map_or(false, |limit| limit <= self.units_programmed);

        let target = match self.locate(address) {
            Some((page, offset)) if !refused && offset + WRITE_BLOCK_SIZE <= PAGE_SIZE => {
                &mut self.memory[page][offset..offset + WRITE_BLOCK_SIZE]
            }
            _ => {
                self.error = true;
                return;
            }
        };

        // a unit can only be programmed once between erases
        if target.iter().any(|b| *b != ERASED_BYTE) {
            self.error = true;
            return;
        }

        target.copy_from_slice(unit);
        self.units_programmed += 1;
        self.busy_polls = self.busy_per_operation;
    }

    fn start_erase(&mut self, page: u32) {
        match self.slot(page) {
            Some(slot) if !self.locked && !self.fail_erase => {
                self.memory[slot] = [ERASED_BYTE; PAGE_SIZE];
                self.erase_counts[slot] += 1;
                self.busy_polls = self.busy_per_operation;
            }
            _ => self.error = true,
        }
    }

    fn read(&mut self, address: u32, buf: &mut [u8]) {
        for (i, byte) in buf.iter_mut().enumerate() {
            *byte = match self.locate(address + i as u32) {
                Some((page, offset)) => self.memory[page][offset],
                None => ERASED_BYTE,
            };
        }
    }
}
