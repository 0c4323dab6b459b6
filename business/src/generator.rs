//! Random person data for the demo tables.
//!
//! Rows at odd positions get three children, each of which gets exactly one
//! childless child of its own. Child ids are random and may collide with
//! each other or with top-level ids.

use rand::Rng;
use rand::seq::SliceRandom as _;

use crate::Record;

/// Pool for first names, last names and email local parts.
pub const NAMES: [&str; 9] = [
    "Jon",
    "Cersei",
    "Jaime",
    "Arya",
    "Daenerys",
    "Melisandre",
    "Ferrara",
    "Rossini",
    "Harvey",
];

pub const EMAIL_DOMAINS: [&str; 4] = ["gmail.com", "yahoo.com", "outlook.com", "example.com"];

const CHILDREN_PER_ROW: usize = 3;
const MAX_CHILD_ID: u32 = 999_999;

/// Generates `count` top-level rows with ids `1..=count` using the thread RNG.
pub fn generate_random_data(count: usize) -> Vec<Record> {
    generate(count, &mut rand::thread_rng())
}

/// Generates `count` top-level rows with ids `1..=count`.
pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Record> {
    (1..=count)
        .map(|position| {
            let id = u32::try_from(position).unwrap_or(u32::MAX);
            let children = random_children(position, rng);
            let mut row = random_person(id, rng);
            row.children = children;
            row
        })
        .collect()
}

fn random_children<R: Rng + ?Sized>(position: usize, rng: &mut R) -> Option<Vec<Record>> {
    if position % 2 == 0 {
        return None;
    }

    let children = (0..CHILDREN_PER_ROW)
        .map(|_| {
            let mut child = random_person(random_id(rng), rng);
            let grandchild = random_person(random_id(rng), rng);
            child.children = Some(vec![grandchild]);
            child
        })
        .collect();

    Some(children)
}

fn random_person<R: Rng + ?Sized>(id: u32, rng: &mut R) -> Record {
    let last_name = random_name(rng).to_owned();
    let first_name = random_name(rng).to_owned();
    let age = rng.gen_range(1..=100);
    let phone_number = random_phone_number(rng);
    // The email takes two fresh draws rather than the row's own names.
    let email = random_email(random_name(rng), random_name(rng), rng);

    Record {
        id,
        first_name,
        last_name,
        age,
        phone_number,
        email,
        children: None,
    }
}

fn random_id<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(1..=MAX_CHILD_ID)
}

fn random_name<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    NAMES.choose(rng).copied().unwrap_or(NAMES[0])
}

/// `+1-XXX-XXX-XXXX` built from a ten digit number.
fn random_phone_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    let digits = rng.gen_range(1_000_000_000_u64..=9_999_999_999).to_string();
    format!("+1-{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..])
}

fn random_email<R: Rng + ?Sized>(first_name: &str, last_name: &str, rng: &mut R) -> String {
    let domain = EMAIL_DOMAINS.choose(rng).copied().unwrap_or(EMAIL_DOMAINS[0]);
    format!(
        "{}.{}@{domain}",
        first_name.to_lowercase(),
        last_name.to_lowercase()
    )
}
