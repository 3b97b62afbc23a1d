//! Brazilian city pairs with their simulated distances.
//!
//! Distances follow from the UTF-16 code-unit sum of `origin + destination`.

pub struct CityPair {
    pub origin: &'static str,
    pub destination: &'static str,
    pub km: u32,
}

pub const SAO_PAULO_RIO: CityPair = CityPair {
    origin: "São Paulo",
    destination: "Rio de Janeiro",
    km: 491,
};

pub const CURITIBA_FLORIANOPOLIS: CityPair = CityPair {
    origin: "Curitiba",
    destination: "Florianópolis",
    km: 128,
};

pub const BELO_HORIZONTE_BRASILIA: CityPair = CityPair {
    origin: "Belo Horizonte",
    destination: "Brasília",
    km: 119,
};

pub const CAMPINAS_SANTOS: CityPair = CityPair {
    origin: "Campinas",
    destination: "Santos",
    km: 144,
};

pub const RECIFE_NATAL: CityPair = CityPair {
    origin: "Recife",
    destination: "Natal",
    km: 236,
};

pub const ALL: &[CityPair] = &[
    SAO_PAULO_RIO,
    CURITIBA_FLORIANOPOLIS,
    BELO_HORIZONTE_BRASILIA,
    CAMPINAS_SANTOS,
    RECIFE_NATAL,
];
