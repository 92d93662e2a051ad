//! Integration test framework for nas5g
#![allow(missing_docs)]
//!
//! This crate plays the part of the code that sits around the IE codec: a
//! 5GMM message assembler that owns the buffer and a parser that walks it,
//! handing each IE a window and advancing by the returned octet count.
//!
//! # Components
//!
//! - [`message`] - Minimal 5GMM message writer and reader
//! - [`test_utils`] - Logging setup for tests
//!
//! # Test Categories
//!
//! 1. **De-registration Request** - ngKSI and de-registration type sharing one octet
//! 2. **UL NAS Transport** - payload container type beside a spare half octet

pub mod message;

pub use message::{
    MessageReader, MessageWriter, DEREGISTRATION_REQUEST_UE_ORIGINATING,
    DEREGISTRATION_REQUEST_UE_TERMINATED, EPD_5GMM, HEADER_LEN, PLAIN_NAS_MESSAGE, UL_NAS_TRANSPORT,
};
pub use test_utils::{init_test_logging, TestResult};
