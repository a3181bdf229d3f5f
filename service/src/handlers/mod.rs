//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Built-in option handlers
//!
//! | Handler            | Frame                                      |
//! |--------------------|--------------------------------------------|
//! | `ttype.will`       | `IAC WILL TTYPE`                           |
//! | `ttype.wont`       | `IAC WONT <any>`                           |
//! | `ttype.is`         | `IAC SB TTYPE ... IAC SE`                  |
//! | `charset.do`       | `IAC DO CHARSET`                           |
//! | `charset.accepted` | `IAC SB CHARSET ACCEPTED ...`              |
//! | `charset.rejected` | `IAC SB CHARSET REJECTED ...`, `IAC DONT CHARSET` |
//! | `echo.will`        | `IAC WILL ECHO`                            |
//! | `echo.wont`        | `IAC WONT <any>`                           |
//!
//! Both `WONT` handlers react to a refusal of any option, so a client refusing ECHO also
//! clears `ttypeEnabled` and a client refusing TTYPE also clears `echoEnabled`.

mod charset;
mod echo;
mod ttype;

pub use self::charset::{CharsetAccepted, CharsetDo, CharsetRejected};
pub use self::echo::{EchoWill, EchoWont};
pub use self::ttype::{TtypeIs, TtypeWill, TtypeWont, decode_terminal_type};

use crate::OptionHandler;
use std::sync::Arc;
use telnego_codec::{Frame, consts};

/// The built-in handlers, in dispatch order
pub fn builtin() -> Vec<Arc<dyn OptionHandler>> {
    vec![
        Arc::new(TtypeWill),
        Arc::new(TtypeWont),
        Arc::new(TtypeIs),
        Arc::new(CharsetDo),
        Arc::new(CharsetAccepted),
        Arc::new(CharsetRejected),
        Arc::new(EchoWill),
        Arc::new(EchoWont),
    ]
}

/// `IAC WONT <any option>`
fn is_wont_any(frame: &Frame) -> bool {
    frame.starts_with(&[consts::IAC, consts::WONT])
}
