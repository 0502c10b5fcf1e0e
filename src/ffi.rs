//! C-compatible bindings for driving a simulation from a host program.
//!
//! The caller owns the simulation through an opaque handle returned by
//! [`elevsim_create`] and released by [`elevsim_destroy`]. Every function
//! returns an [`ElevSimStatus`] code as `i32`, and panics are caught before
//! they can unwind into the caller.

use std::ffi::c_char;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;

use crate::config::SimulationConfig;
use crate::dispatcher::Building;
use crate::shared::{DoorModel, SimError};

/// C-compatible status code returned by all FFI functions.
///
/// `Ok` = 0, all errors are negative. Values are ABI-stable.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElevSimStatus {
    /// Success.
    Ok = 0,
    /// Handle is null.
    InvalidHandle = -1,
    /// An output pointer is null or a size is out of range.
    InvalidArgument = -2,
    /// Requested floor lies outside the building.
    InvalidFloor = -3,
    /// The building could not be constructed.
    ConfigError = -4,
    /// Caller-provided buffer is too small; the required length was written.
    BufferTooSmall = -5,
    /// A Rust panic was caught at the FFI boundary.
    Panicked = -128,
}

impl From<&SimError> for ElevSimStatus {
    fn from(e: &SimError) -> Self {
        match e {
            SimError::InvalidFloor { .. } => ElevSimStatus::InvalidFloor,
            SimError::NoFloors | SimError::NoElevators => ElevSimStatus::ConfigError,
        }
    }
}

/// Opaque simulation handle handed out to C callers.
pub struct ElevSimHandle {
    building: Building,
}

fn ffi_guard(f: impl FnOnce() -> ElevSimStatus) -> i32 {
    catch_unwind(AssertUnwindSafe(f)).unwrap_or(ElevSimStatus::Panicked) as i32
}

/// Create a simulation with `n_floors` floors and `n_elevators` elevators, all at floor 1.
///
/// On success, writes the new handle to `handle_out`.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn elevsim_create(
    n_floors: u32,
    n_elevators: u32,
    handle_out: *mut *mut ElevSimHandle,
) -> i32 {
    ffi_guard(|| {
        if handle_out.is_null() {
            return ElevSimStatus::InvalidArgument;
        }
        let (n_floors, n_elevators) = match (u8::try_from(n_floors), u8::try_from(n_elevators)) {
            (Ok(f), Ok(e)) => (f, e),
            _ => return ElevSimStatus::InvalidArgument,
        };

        let config = SimulationConfig {
            n_floors,
            n_elevators,
            start_floor: 1,
            door_model: DoorModel::Instant,
        };
        let building = match Building::new(&config) {
            Ok(b) => b,
            Err(e) => return ElevSimStatus::from(&e),
        };

        let handle = Box::into_raw(Box::new(ElevSimHandle { building }));
        // SAFETY: handle_out is non-null and valid per caller contract.
        unsafe { *handle_out = handle };
        ElevSimStatus::Ok
    })
}

/// Destroy a simulation created by [`elevsim_create`].
///
/// # Safety
/// `handle` must come from [`elevsim_create`] and must not be used afterwards.
#[no_mangle]
pub unsafe extern "C" fn elevsim_destroy(handle: *mut ElevSimHandle) -> i32 {
    ffi_guard(|| {
        if handle.is_null() {
            return ElevSimStatus::InvalidHandle;
        }
        drop(Box::from_raw(handle));
        ElevSimStatus::Ok
    })
}

/// Submit a floor request.
///
/// # Safety
/// `handle` must be a live handle from [`elevsim_create`].
#[no_mangle]
pub unsafe extern "C" fn elevsim_request(handle: *mut ElevSimHandle, floor: i32) -> i32 {
    ffi_guard(|| {
        let sim = match handle.as_mut() {
            Some(sim) => sim,
            None => return ElevSimStatus::InvalidHandle,
        };
        match sim.building.assign(floor) {
            Ok(_) => ElevSimStatus::Ok,
            Err(e) => ElevSimStatus::from(&e),
        }
    })
}

/// Advance the simulation by exactly one tick.
///
/// # Safety
/// `handle` must be a live handle from [`elevsim_create`].
#[no_mangle]
pub unsafe extern "C" fn elevsim_step(handle: *mut ElevSimHandle) -> i32 {
    ffi_guard(|| {
        let sim = match handle.as_mut() {
            Some(sim) => sim,
            None => return ElevSimStatus::InvalidHandle,
        };
        sim.building.tick_all();
        ElevSimStatus::Ok
    })
}

/// Copy the NUL-terminated status text into `buf`.
///
/// `len_out` always receives the text length excluding the terminator, so a
/// caller that gets `BufferTooSmall` can retry with `*len_out + 1` bytes.
///
/// # Safety
/// `handle` must be a live handle from [`elevsim_create`], `buf` must point to
/// `buf_len` writable bytes and `len_out` must be valid for a write.
#[no_mangle]
pub unsafe extern "C" fn elevsim_status(
    handle: *const ElevSimHandle,
    buf: *mut c_char,
    buf_len: usize,
    len_out: *mut usize,
) -> i32 {
    ffi_guard(|| {
        let sim = match handle.as_ref() {
            Some(sim) => sim,
            None => return ElevSimStatus::InvalidHandle,
        };
        if buf.is_null() || len_out.is_null() {
            return ElevSimStatus::InvalidArgument;
        }

        let report = sim.building.status_report();
        *len_out = report.len();
        if buf_len < report.len() + 1 {
            return ElevSimStatus::BufferTooSmall;
        }

        ptr::copy_nonoverlapping(report.as_ptr().cast::<c_char>(), buf, report.len());
        *buf.add(report.len()) = 0;
        ElevSimStatus::Ok
    })
}
