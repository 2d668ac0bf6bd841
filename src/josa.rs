//! Isolates the chunk of a token that carries the search word, together with the
//! particle (josa) and excluded suffix attached to it.

/// Particles recognised directly after the search word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Particle {
    Eul,
    Reul,
    Gwa,
    Wa,
    I,
    Ga,
    Ina,
    Na,
    Euro,
    Ro,
    Eun,
    Neun,
    Ran,
    Iran,
}

/// Particle table in matching order. Longer forms come before the shorter
/// forms they end with (이나/나, 으로/로, 이란/란).
pub const PARTICLES: &[Particle] = &[
    Particle::Iran,
    Particle::Ina,
    Particle::Euro,
    Particle::Eul,
    Particle::Reul,
    Particle::Gwa,
    Particle::Wa,
    Particle::I,
    Particle::Ga,
    Particle::Na,
    Particle::Ro,
    Particle::Eun,
    Particle::Neun,
    Particle::Ran,
];

/// Trailing material that is not rewritten but must stay attached to the chunk.
/// Longest first; the first suffix that fits wins.
pub const EXCLUDED_SUFFIXES: &[&str] = &[
    "으로서", "만으로", "에서", "에게", "만을", "만이", "만은", "만에", "의", "에", "등", "만",
];

impl Particle {
    pub fn as_str(self) -> &'static str {
        match self {
            Particle::Eul => "을",
            Particle::Reul => "를",
            Particle::Gwa => "과",
            Particle::Wa => "와",
            Particle::I => "이",
            Particle::Ga => "가",
            Particle::Ina => "이나",
            Particle::Na => "나",
            Particle::Euro => "으로",
            Particle::Ro => "로",
            Particle::Eun => "은",
            Particle::Neun => "는",
            Particle::Ran => "란",
            Particle::Iran => "이란",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        PARTICLES
            .iter()
            .copied()
            .find(|particle| particle.as_str() == value)
    }
}

impl std::fmt::Display for Particle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub chunk: String,
    pub particle: Option<Particle>,
    pub suffix: Option<&'static str>,
}

impl Extraction {
    fn bare(chunk: &str) -> Self {
        Self {
            chunk: chunk.to_string(),
            particle: None,
            suffix: None,
        }
    }
}

fn strip_excluded_suffix<'a>(token: &'a str, search_word: &str) -> (&'a str, Option<&'static str>) {
    for &suffix in EXCLUDED_SUFFIXES {
        let Some(rest) = token.strip_suffix(suffix) else {
            continue;
        };
        if rest.is_empty() || !rest.contains(search_word) {
            continue;
        }
        return (rest, Some(suffix));
    }
    (token, None)
}

/// Splits `token` into the chunk containing `search_word`, its particle and its suffix.
///
/// A token in which the search word does not survive suffix stripping comes back
/// whole, with neither particle nor suffix.
pub fn extract_chunk(token: &str, search_word: &str) -> Extraction {
    if search_word.is_empty() {
        return Extraction::bare(token);
    }

    let (rest, suffix) = strip_excluded_suffix(token, search_word);

    if rest.ends_with(search_word) {
        return Extraction {
            chunk: rest.to_string(),
            particle: None,
            suffix,
        };
    }

    for &particle in PARTICLES {
        let Some(chunk) = rest.strip_suffix(particle.as_str()) else {
            continue;
        };
        if chunk.ends_with(search_word) {
            return Extraction {
                chunk: chunk.to_string(),
                particle: Some(particle),
                suffix,
            };
        }
    }

    if rest.contains(search_word) {
        return Extraction {
            chunk: rest.to_string(),
            particle: None,
            suffix,
        };
    }

    Extraction::bare(token)
}
