//! # recfield — argument/field name-resolution precedence
//!
//! A worked example of what happens when constructor arguments share
//! their names with the fields they initialize. Languages with implicit
//! member scope resolve a bare colliding name to the *argument*, and
//! reaching the field takes an explicit owning-instance qualifier; Rust
//! has no implicit member scope, so this crate reproduces the observable
//! precedence with distinct bindings and explicit assignment order.
//!
//! ## The resolution rules being demonstrated
//!
//! * A bare name that collides with a field denotes the argument.
//! * A field is reached only by naming it through its owner.
//! * Arguments are immutable bindings; rebinding one does not compile.
//!
//! ## Quick Start
//!
//! ```rust
//! use recfield::LabeledRecord;
//!
//! let record = LabeledRecord::new("argument", "argument", "argument", "argument");
//! println!("{}", record);
//! ```
//!
//! ```text
//! a : member, b : argument, c : member, d : member
//! aa: member, bb: argument, cc: member, dd: member
//! ```
//!
//! Only `b` and `bb` ever observe an argument value: they are assigned
//! from the colliding names `a` and `aa`, where the argument wins. The
//! `d` and `dd` arguments are never read at all — their same-named
//! fields take the value of fields `c` and `cc` instead.

use std::fmt;

// ============================================================================
// Record Type
// ============================================================================

/// Eight sentinel-initialized string fields, set during construction
/// according to argument-over-field name precedence.
///
/// The first quartet (`a`..`d`) is fixed at the field-initializer stage,
/// the second (`aa`..`dd`) in the constructor body; both quartets follow
/// the same data flow and end in the same state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabeledRecord {
    /// Set to the literal `"member"` at the initializer stage.
    pub a: String,

    /// Set from the colliding argument `a`.
    pub b: String,

    /// Set to the literal `"member"` at the initializer stage.
    pub c: String,

    /// Set from the already-initialized field `c`.
    pub d: String,

    /// Set to the literal `"member"` in the body.
    pub aa: String,

    /// Set from the colliding argument `aa`.
    pub bb: String,

    /// Set to the literal `"member"` in the body.
    pub cc: String,

    /// Set from the just-assigned field `cc`.
    pub dd: String,
}

impl Default for LabeledRecord {
    /// All eight fields hold the sentinel `"init"`.
    fn default() -> Self {
        Self {
            a: String::from("init"),
            b: String::from("init"),
            c: String::from("init"),
            d: String::from("init"),
            aa: String::from("init"),
            bb: String::from("init"),
            cc: String::from("init"),
            dd: String::from("init"),
        }
    }
}

impl LabeledRecord {
    /// Construct a record from four arguments whose names collide with
    /// four of the fields.
    ///
    /// `a` and `aa` are read through their bare (argument) names; `d`
    /// and `dd` exist only for the collision and are never read, because
    /// the same-named fields take their values from fields `c` and `cc`.
    #[allow(unused_variables)]
    pub fn new(a: &str, d: &str, aa: &str, dd: &str) -> Self {
        // Initializer stage: the first quartet is fixed before the body
        // runs. A bare colliding name denotes the argument.
        let field_a = String::from("member");
        let field_b = String::from(a); // the argument `a`, not the field
        let field_c = String::from("member");
        let field_d = field_c.clone(); // the field `c`, already initialized

        let mut record = Self {
            a: field_a,
            b: field_b,
            c: field_c,
            d: field_d,
            ..Self::default()
        };

        // Body stage: the second quartet follows the same flow, with the
        // owning-instance qualifier reaching the fields and bare names
        // still denoting arguments.
        record.aa = String::from("member");
        record.bb = String::from(aa); // the argument `aa`, not the field
        record.cc = String::from("member");
        record.dd = record.cc.clone(); // the field `cc`, just assigned

        // Rebinding `a`, `d`, `aa`, or `dd` here would not compile:
        // arguments are immutable bindings.
        record
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl fmt::Display for LabeledRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "a : {}, b : {}, c : {}, d : {}",
            self.a, self.b, self.c, self.d
        )?;
        write!(
            f,
            "aa: {}, bb: {}, cc: {}, dd: {}",
            self.aa, self.bb, self.cc, self.dd
        )
    }
}
