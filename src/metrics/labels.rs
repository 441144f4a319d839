//! Display labels are explicit constants so that output order never depends
//! on sampled data.

/// Operational sectors, in display order.
pub const SECTORS: [&str; 4] = ["Docas", "Refrigeração", "Automação", "Iluminação"];

/// Benchmarked facilities, in display order.
pub const FACILITIES: [&str; 3] = ["Armazém A", "Armazém B", "Armazém C"];

/// Projection horizon labels.
///
/// The sequence starts at "Nov" and wraps into the following year; it is a
/// display convention and must not be calendar-sorted.
pub const MONTHS: [&str; 12] = [
    "Nov", "Dez", "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out",
];
