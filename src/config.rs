//! # Persistent configuration
//!
//! Settings are kept in a pool of flash pages. Every save appends one fixed size block to the current page, so a page
//! is only erased after it has absorbed many saves, and a full page moves the store on to the next free page of the
//! pool. The most recent block is the configuration.
//!
//! ## Block format
//!
//! ```text
//! +-----+-----+-----+---------+-------+----------------+-----+----------------+---------+
//! | 'C' | 'F' | 'G' | version | index | saver 0 bytes  | ... | saver n bytes  | padding |
//! +-----+-----+-----+---------+-------+----------------+-----+----------------+---------+
//! ```
//!
//! Blocks are padded with erased bytes to a multiple of 16 bytes. The index byte is the rotation index of the page the
//! block lives in, it increases by one every time the store moves to a new page and wraps around after `page_count`,
//! so at boot the page holding the newest blocks is the last one of the contiguous run of indices.
//!
//! The first program unit of a block, the one carrying the header, is written last. A block cut short by a reset
//! has no header and is skipped when the page is scanned.
//!
//! ## Saving
//!
//! Anything can ask for a save with [`SaveScheduler::schedule`], typically the tick handler after a button press. The
//! save itself runs from the idle loop through [`ConfigStore::save_config`], only once the request is older than
//! [`SAVE_DEBOUNCE_MS`], so a burst of presses results in a single flash write.

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use heapless::Vec;

use crate::error::ConfigError;
use crate::flash::{self, FlashController, StoreLayout, ERASED_BYTE, WRITE_BLOCK_SIZE};

pub const CONFIG_VERSION: u8 = 1;

/// The first four bytes of every block
pub const HEADER_MAGIC: [u8; 4] = [b'C', b'F', b'G', CONFIG_VERSION];

/// The magic plus the rotation index byte
pub const HEADER_SIZE: usize = HEADER_MAGIC.len() + 1;

/// Blocks are padded to a multiple of this many bytes
pub const BLOCK_ALIGN: usize = 16;

/// The rotation index of a page that holds no block
pub const NO_INDEX: u8 = u8::MAX;

/// A save request must be this old before it is carried out
pub const SAVE_DEBOUNCE_MS: u32 = 60_000;

pub const MAX_SAVERS: usize = 8;
pub const MAX_PAGES: usize = 32;
pub const MAX_BLOCK_SIZE: usize = 256;

const SCAN_CHUNK: usize = 64;

/// A settings type that can repair itself after being restored from flash
pub trait Validator {
    /// `v.validate()` replaces any out of range field with a sane value
    fn validate(&mut self) {}
}

/// A settings type the store can persist, copied by value into and out of a block
pub trait ConfigSaver: Validator {
    /// `s.settings_size()` is the number of bytes `s` occupies in a block, it must never change
    fn settings_size(&self) -> usize;

    /// `s.save(buf)` copies the settings into `buf`, which is exactly `settings_size()` long
    fn save(&self, buf: &mut [u8]);

    /// `s.restore(buf)` copies the settings out of `buf`, which is exactly `settings_size()` long
    fn restore(&mut self, buf: &[u8]);
}

/// A pending save request, shared by reference between the tick handler and the idle loop
#[derive(Debug, Default)]
pub struct SaveScheduler {
    pending: AtomicBool,
    booked_ms: AtomicU32,
}

impl SaveScheduler {
    pub const fn new() -> Self {
        Self {
            pending: AtomicBool::new(false),
            booked_ms: AtomicU32::new(0),
        }
    }

    /// `sched.schedule(now)` books a save, restarting the debounce window if one was already pending
    pub fn schedule(&self, now_ms: u32) {
        self.booked_ms.store(now_ms, Ordering::Relaxed);
        self.pending.store(true, Ordering::Release);
    }

    /// `sched.is_pending()` is true iff a save has been booked and not carried out yet
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// `sched.is_due(now)` is true iff a pending save has waited out the debounce window
    pub fn is_due(&self, now_ms: u32) -> bool {
        self.is_pending() && SAVE_DEBOUNCE_MS <= now_ms.wrapping_sub(self.booked_ms.load(Ordering::Relaxed))
    }

    /// `sched.take_due(now, force)` clears the pending request and is true iff a save should happen now
    fn take_due(&self, now_ms: u32, force: bool) -> bool {
        if force || self.is_due(now_ms) {
            self.pending.store(false, Ordering::Release);
            true
        } else {
            false
        }
    }
}

/// What the store knows about one page of the pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PageInfo {
    pub page: u32,

    /// Rotation index from the page's first block header, `NO_INDEX` if there is none
    pub index: u8,

    /// The page holds at least one byte that isn't erased
    pub dirty: bool,
}

impl PageInfo {
    fn blank(page: u32) -> Self {
        Self {
            page,
            index: NO_INDEX,
            dirty: false,
        }
    }
}

/// The wear-leveled configuration store is represented here
pub struct ConfigStore<'a, F: FlashController> {
    flash: F,
    layout: StoreLayout,
    scheduler: &'a SaveScheduler,

    /// Settings size of every registered saver, in block order
    saver_sizes: Vec<usize, MAX_SAVERS>,
    block_size: usize,

    /// Every page of the pool, ordered by page number between operations
    pages: Vec<PageInfo, MAX_PAGES>,

    current_page: u32,
    current_index: u8,

    /// Offset of the last used block of the current page, `None` while the page is empty
    current_offset: Option<u32>,
}

impl<'a, F: FlashController> ConfigStore<'a, F> {
    /// `ConfigStore::new(flash, layout, sched, savers)` is a new store for the given savers
    ///
    /// Nothing is read from flash until [`ConfigStore::restore_config`] is called, which must happen before the first
    /// save.
    ///
    /// # Arguments
    ///
    /// * `flash` - the flash controller, owned by the store from now on
    ///
    /// * `layout` - the pool of pages reserved for configuration
    ///
    /// * `scheduler` - where save requests are booked
    ///
    /// * `savers` - every settings type to persist, the same savers in the same order must be passed to every
    /// restore and save
    pub fn new(
        flash: F,
        layout: StoreLayout,
        scheduler: &'a SaveScheduler,
        savers: &[&dyn ConfigSaver],
    ) -> Result<Self, ConfigError> {
        let mut saver_sizes = Vec::new();
        for saver in savers {
            saver_sizes
                .push(saver.settings_size())
                .map_err(|_| ConfigError::TooManySavers)?;
        }

        let payload = HEADER_SIZE + saver_sizes.iter().sum::<usize>();
        let block_size = (payload + BLOCK_ALIGN - 1) / BLOCK_ALIGN * BLOCK_ALIGN;
        if MAX_BLOCK_SIZE < block_size || (layout.page_size as usize) < block_size {
            return Err(ConfigError::BlockTooLarge);
        }

        let mut pages = Vec::new();
        for page in layout.pages() {
            pages
                .push(PageInfo::blank(page))
                .map_err(|_| ConfigError::PoolTooLarge)?;
        }

        Ok(Self {
            flash,
            layout,
            scheduler,
            saver_sizes,
            block_size,
            pages,
            current_page: layout.first_page,
            current_index: 0,
            current_offset: None,
        })
    }

    /// `store.restore_config(savers)` loads the newest block into the savers and is true iff one was found
    ///
    /// Every page of the pool is scanned. Pages that hold neither the newest blocks nor anything else useful are
    /// erased so they can be rotated into later. Each saver is validated after being restored. When no block is
    /// found the savers are left untouched.
    pub fn restore_config(&mut self, savers: &mut [&mut dyn ConfigSaver]) -> Result<bool, ConfigError> {
        self.check_layout(savers.iter().map(|s| s.settings_size()))?;

        self.scan_pages();

        self.pages.sort_unstable_by_key(|p| p.index);
        let (page, index) = self.find_current_page();
        self.current_page = page;
        self.current_index = index;

        self.erase_stale_pages();
        self.pages.sort_unstable_by_key(|p| p.page);

        let (latest, last_used) = self.scan_blocks();
        self.current_offset = last_used;

        let offset = match latest {
            Some(offset) => offset,
            None => {
                #[cfg(feature = "defmt")]
                defmt::info!("no stored config, page {} index {}", self.current_page, self.current_index);
                return Ok(false);
            }
        };

        let mut buf = [ERASED_BYTE; MAX_BLOCK_SIZE];
        let block = &mut buf[..self.block_size];
        self.flash.read(self.layout.page_address(self.current_page) + offset, block);

        let mut pos = HEADER_SIZE;
        for saver in savers.iter_mut() {
            let size = saver.settings_size();
            saver.restore(&block[pos..pos + size]);
            saver.validate();
            pos += size;
        }

        #[cfg(feature = "defmt")]
        defmt::info!(
            "config restored from page {} index {} offset {}",
            self.current_page,
            self.current_index,
            offset
        );

        Ok(true)
    }

    /// `store.schedule_save(now)` books a save to happen once the debounce window has passed
    pub fn schedule_save(&self, now_ms: u32) {
        self.scheduler.schedule(now_ms);
    }

    /// `store.save_config(savers, now, force)` appends a block if a save is due, and is true iff one was written
    ///
    /// A save is due when the pending request has waited out the debounce window, or always if `force` is true.
    /// The pending request is cleared whatever the outcome. When the current page is full the store moves on to the
    /// next page that is still erased, counting circularly from the current one. If there is none the save fails
    /// with `NoFreePage` and flash is left as it was.
    pub fn save_config(&mut self, savers: &[&dyn ConfigSaver], now_ms: u32, force: bool) -> Result<bool, ConfigError> {
        self.check_layout(savers.iter().map(|s| s.settings_size()))?;

        if !self.scheduler.take_due(now_ms, force) {
            return Ok(false);
        }

        let (page, index, offset) = match self.next_slot() {
            Ok(slot) => slot,
            Err(e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("config save aborted: {}", e);
                return Err(e);
            }
        };

        // the slot is used up as soon as programming starts, even if it fails part way
        if let Some(info) = self.pages.iter_mut().find(|p| p.page == page) {
            info.dirty = true;
            info.index = index;
        }
        self.current_page = page;
        self.current_index = index;
        self.current_offset = Some(offset);

        let mut buf = [ERASED_BYTE; MAX_BLOCK_SIZE];
        let block = &mut buf[..self.block_size];
        block[..HEADER_MAGIC.len()].copy_from_slice(&HEADER_MAGIC);
        block[HEADER_MAGIC.len()] = index;

        let mut pos = HEADER_SIZE;
        for saver in savers {
            let size = saver.settings_size();
            saver.save(&mut block[pos..pos + size]);
            pos += size;
        }

        let address = self.layout.page_address(page) + offset;
        flash::program(&mut self.flash, address + WRITE_BLOCK_SIZE as u32, &block[WRITE_BLOCK_SIZE..])?;
        flash::program(&mut self.flash, address, &block[..WRITE_BLOCK_SIZE])?;

        #[cfg(feature = "defmt")]
        defmt::info!("config saved: {=usize} bytes at {=u32:#x}", self.block_size, address);

        Ok(true)
    }

    /// `store.erase_config()` erases every page of the pool, leaving the store as if it had never been written
    ///
    /// Every page is attempted even if some fail, the first failure is reported.
    pub fn erase_config(&mut self) -> Result<(), ConfigError> {
        let mut result = Ok(());

        for info in self.pages.iter_mut() {
            match flash::erase_page(&mut self.flash, info.page) {
                Ok(()) => *info = PageInfo::blank(info.page),
                Err(e) => {
                    if result.is_ok() {
                        result = Err(e.into());
                    }
                }
            }
        }

        self.current_page = self.layout.first_page;
        self.current_index = 0;
        self.current_offset = None;

        #[cfg(feature = "defmt")]
        defmt::info!("config erased");

        result
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn current_index(&self) -> u8 {
        self.current_index
    }

    pub fn current_offset(&self) -> Option<u32> {
        self.current_offset
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn pages(&self) -> &[PageInfo] {
        &self.pages
    }

    pub fn flash(&self) -> &F {
        &self.flash
    }

    /// `store.release()` gives the flash controller back
    pub fn release(self) -> F {
        self.flash
    }

    fn check_layout(&self, sizes: impl ExactSizeIterator<Item = usize>) -> Result<(), ConfigError> {
        if sizes.len() != self.saver_sizes.len() || !sizes.zip(self.saver_sizes.iter()).all(|(a, b)| a == *b) {
            return Err(ConfigError::LayoutMismatch);
        }
        Ok(())
    }

    /// Read the header and dirtiness of every page
    fn scan_pages(&mut self) {
        for i in 0..self.pages.len() {
            let page = self.pages[i].page;
            let base = self.layout.page_address(page);

            let mut header = [0_u8; HEADER_SIZE];
            self.flash.read(base, &mut header);
            // indices run from 0 to page_count, anything else is a foreign or corrupt header
            let index = match header[HEADER_MAGIC.len()] {
                index if header[..HEADER_MAGIC.len()] == HEADER_MAGIC
                    && index as usize <= self.layout.page_count =>
                {
                    index
                }
                _ => NO_INDEX,
            };

            let dirty = !self.is_erased(base, self.layout.page_size);
            self.pages[i] = PageInfo { page, index, dirty };
        }
    }

    fn is_erased(&mut self, address: u32, len: u32) -> bool {
        let mut chunk = [0_u8; SCAN_CHUNK];
        let mut offset = 0;
        while offset < len {
            let n = SCAN_CHUNK.min((len - offset) as usize);
            self.flash.read(address + offset, &mut chunk[..n]);
            if chunk[..n].iter().any(|b| *b != ERASED_BYTE) {
                return false;
            }
            offset += n as u32;
        }
        true
    }

    /// The page and index at the end of the contiguous run of indices, expects pages ordered by index
    fn find_current_page(&self) -> (u32, u8) {
        let mut current = match self.pages.first() {
            Some(first) if first.index != NO_INDEX => first,
            _ => return (self.layout.first_page, 0),
        };

        for info in self.pages.iter().skip(1) {
            if info.index == NO_INDEX || current.index.checked_add(1) != Some(info.index) {
                break;
            }
            current = info;
        }

        (current.page, current.index)
    }

    /// Erase every dirty page other than the current one, and the current one too if it has no header
    fn erase_stale_pages(&mut self) {
        for info in self.pages.iter_mut() {
            let stale = info.page != self.current_page || info.index == NO_INDEX;
            if !(info.dirty && stale) {
                continue;
            }

            match flash::erase_page(&mut self.flash, info.page) {
                Ok(()) => *info = PageInfo::blank(info.page),
                Err(_e) => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("could not erase config page {}: {}", info.page, _e);
                }
            }
        }
    }

    /// Walk the blocks of the current page
    ///
    /// Returns the offset of the newest block with a header, and the offset of the last slot that isn't erased.
    /// Slots cut short by a reset have no header and are stepped over.
    fn scan_blocks(&mut self) -> (Option<u32>, Option<u32>) {
        let base = self.layout.page_address(self.current_page);
        let block = self.block_size as u32;

        let mut latest = None;
        let mut last_used = None;
        let mut offset = 0;
        while offset + block <= self.layout.page_size {
            let mut magic = [0_u8; HEADER_MAGIC.len()];
            self.flash.read(base + offset, &mut magic);

            if magic == HEADER_MAGIC {
                latest = Some(offset);
            } else if self.is_erased(base + offset, block) {
                break;
            }
            last_used = Some(offset);
            offset += block;
        }

        (latest, last_used)
    }

    /// The page, index and offset of the slot the next block goes into
    fn next_slot(&self) -> Result<(u32, u8, u32), ConfigError> {
        let block = self.block_size as u32;
        match self.current_offset {
            None => Ok((self.current_page, self.current_index, 0)),
            Some(offset) if offset + 2 * block <= self.layout.page_size => {
                Ok((self.current_page, self.current_index, offset + block))
            }
            Some(_) => {
                let page = self.find_free_page().ok_or(ConfigError::NoFreePage)?;
                Ok((page, self.next_index(), 0))
            }
        }
    }

    /// The first erased page after the current one, counting circularly
    fn find_free_page(&self) -> Option<u32> {
        let len = self.pages.len();
        let position = self
            .pages
            .iter()
            .position(|p| p.page == self.current_page)
            .unwrap_or(0);

        (1..len)
            .map(|k| &self.pages[(position + k) % len])
            .find(|p| !p.dirty)
            .map(|p| p.page)
    }

    /// Indices run from 0 to `page_count` inclusive, one more value than there are pages
    fn next_index(&self) -> u8 {
        if self.layout.page_count as u8 <= self.current_index {
            0
        } else {
            self.current_index + 1
        }
    }
}
