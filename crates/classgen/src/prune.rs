//! Overload Pruner (spec §4.4): static elimination of signatures the
//! scripting runtime's tuple parser could never dispatch between.
//!
//! Grounded on the original engine's `vtkWrapPython_RemovePreceededMethods`
//! (original_source/Wrapping/vtkWrapPython.c): for every ordered pair of
//! same-name, same-arity signatures, compare argument-by-argument and cast
//! two votes; if every position agrees or votes the same direction, the
//! loser is tombstoned (its `name` cleared). A position whose mismatch
//! isn't covered by the precedence table aborts the comparison and both
//! signatures survive. The precedence rules below are evaluated in the
//! exact source order the original tests them — spec §9 flags that order
//! as load-bearing and directs it be preserved verbatim.

use classgen_model::{BaseKind, Indirection, MethodDescription, TypeTag};

/// Which of a comparison pair, if either, the precedence table prefers.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Vote {
    Neither,
    First,
    Second,
}

/// Compare two argument tags under the precedence table (spec §4.4).
/// Returns `Vote::Neither` both when the table has no opinion and when the
/// pair is simply incomparable (the latter case aborts the whole
/// signature-level comparison at the call site; see [`dominates`]).
fn vote(a: TypeTag, b: TypeTag) -> Vote {
    if a.indirection != b.indirection {
        return Vote::Neither;
    }

    let (base_a, base_b) = (a.base_kind, b.base_kind);
    let (unsigned_a, unsigned_b) = (a.is_unsigned(), b.is_unsigned());

    // double preceeds float
    if base_a == BaseKind::Double && base_b == BaseKind::Float {
        return Vote::First;
    }
    if base_a == BaseKind::Float && base_b == BaseKind::Double {
        return Vote::Second;
    }
    // unsigned char preceeds signed char
    if base_a == BaseKind::Char && unsigned_a && base_b == BaseKind::SignedChar {
        return Vote::First;
    }
    if base_a == BaseKind::SignedChar && base_b == BaseKind::Char && unsigned_b {
        return Vote::Second;
    }
    // signed preceeds unsigned for everything but char
    if base_a != BaseKind::Char && base_b != BaseKind::Char && base_a == base_b && unsigned_a != unsigned_b {
        return if unsigned_b { Vote::First } else { Vote::Second };
    }
    // integer promotion precedence: int/id_type over short/signed_char/unsigned-char
    if is_int_or_id(base_a) && is_narrow_integer(base_b, unsigned_b) {
        return Vote::First;
    }
    if is_int_or_id(base_b) && is_narrow_integer(base_a, unsigned_a) {
        return Vote::Second;
    }
    Vote::Neither
}

fn is_int_or_id(base: BaseKind) -> bool {
    matches!(base, BaseKind::Int | BaseKind::IdType)
}

fn is_narrow_integer(base: BaseKind, unsigned: bool) -> bool {
    matches!(base, BaseKind::Short | BaseKind::SignedChar) || (base == BaseKind::Char && unsigned)
}

/// `char*` precedes a `string` value or `string&` — the one precedence
/// rule that fires regardless of indirection equality (it explicitly
/// compares a pointer against a value/reference).
fn vote_char_ptr_over_string(a: TypeTag, b: TypeTag) -> Vote {
    let a_is_char_ptr = a.is_char_ptr();
    let b_is_string_like = b.is_string() && matches!(b.indirection, Indirection::None | Indirection::Reference);
    if a_is_char_ptr && b_is_string_like {
        return Vote::First;
    }
    let b_is_char_ptr = b.is_char_ptr();
    let a_is_string_like = a.is_string() && matches!(a.indirection, Indirection::None | Indirection::Reference);
    if b_is_char_ptr && a_is_string_like {
        return Vote::Second;
    }
    Vote::Neither
}

/// Whether signature `a` dominates signature `b`: same arity, same
/// per-argument array counts, and every argument position either agrees
/// or votes for `a`, with at least one decisive vote.
///
/// A position with a base/sign/indirection mismatch not covered by any
/// precedence rule aborts the whole comparison (spec §4.4: "Any position
/// with a mismatch not covered by the table aborts the comparison (both
/// survive)"), implemented here by returning `false` for both directions.
fn dominates(a: &MethodDescription, b: &MethodDescription) -> bool {
    decide(a, b) == Vote::First
}

/// Run the full per-position vote for a pair, short-circuiting on the
/// first decisive mismatch (spec §4.4 tie-break: "Comparison within a pair
/// stops at the first decisive mismatch").
fn decide(a: &MethodDescription, b: &MethodDescription) -> Vote {
    if a.arguments.len() != b.arguments.len() {
        return Vote::Neither;
    }

    let mut vote1 = false;
    let mut vote2 = false;

    for (arg_a, arg_b) in a.arguments.iter().zip(&b.arguments) {
        if arg_a.array_count != arg_b.array_count {
            return Vote::Neither;
        }

        let ta = arg_a.type_tag;
        let tb = arg_b.type_tag;

        let this_vote = match vote(ta, tb) {
            Vote::Neither => vote_char_ptr_over_string(ta, tb),
            decided => decided,
        };

        match this_vote {
            Vote::First => {
                if !vote2 {
                    vote1 = true;
                }
            }
            Vote::Second => {
                if !vote1 {
                    vote2 = true;
                }
            }
            Vote::Neither => {
                let same_base = ta.base_kind == tb.base_kind;
                let same_unsigned = ta.is_unsigned() == tb.is_unsigned();
                let same_indirect = ta.indirection == tb.indirection;
                if !(same_base && same_unsigned && same_indirect) {
                    // mismatch not covered by the table: both survive
                    return Vote::Neither;
                }
            }
        }
    }

    match (vote1, vote2) {
        (true, false) => Vote::First,
        (false, true) => Vote::Second,
        _ => Vote::Neither,
    }
}

/// Tombstone dominated signatures within a contiguous block of methods
/// that all share the same name.
///
/// Mirrors `vtkWrapPython_RemovePreceededMethods`'s outer double loop:
/// for each occurrence `occ1` still bearing the name, compare against
/// every later occurrence `occ2`; whichever loses has its `name` cleared.
/// When `sig1` loses, the original `break`s out of its inner loop — once
/// a signature is dominated it stops being compared against the rest.
///
/// Returns, for each tombstoned index, the surviving index that dominated
/// it — [`crate::synth`] uses this to append the loser's signature text to
/// the survivor's docstring (spec §4.6, post-pass bookkeeping).
pub fn prune_overloads(methods: &mut [MethodDescription]) -> Vec<Option<usize>> {
    let n = methods.len();
    let mut dominated_by = vec![None; n];

    for occ1 in 0..n {
        if methods[occ1].name.is_none() {
            continue;
        }
        let name = methods[occ1].name.clone();

        let mut occ2 = occ1 + 1;
        while occ2 < n {
            if methods[occ2].name != name {
                occ2 += 1;
                continue;
            }

            if dominates(&methods[occ1], &methods[occ2]) {
                methods[occ2].name = None;
                dominated_by[occ2] = Some(occ1);
            } else if dominates(&methods[occ2], &methods[occ1]) {
                methods[occ1].name = None;
                dominated_by[occ1] = Some(occ2);
                break;
            }
            occ2 += 1;
        }
    }

    dominated_by
}

#[cfg(test)]
mod prune_tests;
