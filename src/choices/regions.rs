use super::Choice;

/// Autonomous communities. The autonomous cities of Ceuta and Melilla are
/// only listed as provinces.
pub const REGION_CHOICES: &[Choice] = &[
    ("AN", "Andalusia"),
    ("AR", "Aragon"),
    ("O", "Principality of Asturias"),
    ("IB", "Balearic Islands"),
    ("PV", "Basque Country"),
    ("CN", "Canary Islands"),
    ("S", "Cantabria"),
    ("CM", "Castile-La Mancha"),
    ("CL", "Castile and Leon"),
    ("CT", "Catalonia"),
    ("EX", "Extremadura"),
    ("GA", "Galicia"),
    ("LO", "La Rioja"),
    ("M", "Region of Madrid"),
    ("MU", "Region of Murcia"),
    ("NA", "Foral Community of Navarre"),
    ("VC", "Valencian Community"),
];
