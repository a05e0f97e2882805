// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::fmt::Display;

use thiserror::Error;

/// ExitCode defines the exit code from the VM execution.
#[repr(u8)]
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum ExitCode {
    Ok = 0,
    /// Indicates failure to find a method in an actor.
    SysErrInvalidMethod = 3,
    /// Indicates the receiver of a message is not valid.
    SysErrInvalidReceiver = 5,
    /// Indicates a message sender has insufficient funds for a message's execution.
    SysErrInsufficientFunds = 6,
    /// Indicates a message execution is forbidden for the caller.
    SysErrForbidden = 8,
    /// Indicates actor code performed a disallowed operation.
    SysErrIllegalActor = 9,
    /// Indicates an invalid argument passed to a runtime method.
    SysErrIllegalArgument = 10,
    /// Engine invariant violated; the enclosing block must be abandoned.
    SysErrInternal = 11,

    // -------Actor Error Codes-------
    /// Indicates an actor's internal state is invalid.
    ErrIllegalState = 20,
    /// Indicates de/serialization failure within actor code.
    ErrSerialization = 21,
}

impl ExitCode {
    /// returns true if the exit code was a success
    pub fn is_success(self) -> bool {
        matches!(self, ExitCode::Ok)
    }

    pub fn value(self) -> u8 {
        self as u8
    }
}

/// The error type returned by dispatches and actor method calls.
///
/// A fatal error is a fault: engine state can no longer be trusted and the
/// processing of the enclosing block must stop. Any other error is a revert
/// scoped to the message that caused it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("ActorError(fatal: {fatal}, exit_code: {exit_code:?}, msg: {msg})")]
pub struct ActorError {
    fatal: bool,
    /// The exit code for this invocation, must not be `Ok`.
    exit_code: ExitCode,
    /// Message for debugging purposes,
    msg: String,
}

impl ActorError {
    /// Revert with the given exit code.
    pub fn new(exit_code: ExitCode, msg: String) -> Self {
        Self {
            fatal: false,
            exit_code,
            msg,
        }
    }

    pub fn new_fatal(msg: impl Display) -> Self {
        Self {
            fatal: true,
            exit_code: ExitCode::SysErrInternal,
            msg: msg.to_string(),
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.fatal
    }

    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }

    pub fn msg(&self) -> &str {
        &self.msg
    }
}

/// Convenience macro for generating Actor Errors
#[macro_export]
macro_rules! actor_error {
    // Fatal Errors
    ( fatal($msg:expr) ) => { $crate::interpreter::ActorError::new_fatal($msg.to_string()) };
    ( fatal($msg:literal $(, $ex:expr)+) ) => {
        $crate::interpreter::ActorError::new_fatal(format!($msg, $($ex,)*))
    };

    // Error with only one stringable expression
    ( $code:ident; $msg:expr ) => {
        $crate::interpreter::ActorError::new($crate::interpreter::ExitCode::$code, $msg.to_string())
    };

    // String with positional arguments
    ( $code:ident; $msg:literal $(, $ex:expr)+ ) => {
        $crate::interpreter::ActorError::new(
            $crate::interpreter::ExitCode::$code,
            format!($msg, $($ex,)*),
        )
    };
}
