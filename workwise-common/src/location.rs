//! Lapu-Lapu City location data
//!
//! Registration is restricted to a single city; the address is narrowed to
//! one of the city's barangays.

/// The only city accepted at registration
pub const CITY: &str = "Lapu-Lapu City";

/// Barangays of Lapu-Lapu City, in display order
pub const BARANGAYS: [&str; 29] = [
    "Agus",
    "Babag",
    "Bankal",
    "Basak",
    "Buaya",
    "Calawisan",
    "Canjulao",
    "Caubian",
    "Caw-oy",
    "Gun-ob",
    "Ibo",
    "Looc",
    "Mactan",
    "Maribago",
    "Marigondon",
    "Pajac",
    "Pajican",
    "Pajo",
    "Pangan-an",
    "Pilipog",
    "Poblacion",
    "Punta Engaño",
    "Sabang",
    "Santa Rosa",
    "Subabasbas",
    "Talima",
    "Tingo",
    "Tungasan",
    "Yapak",
];

/// Exact (case-sensitive) membership check against [`BARANGAYS`]
pub fn is_valid_barangay(name: &str) -> bool {
    BARANGAYS.contains(&name)
}
