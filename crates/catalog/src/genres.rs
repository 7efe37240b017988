//! Genre directory shown on the genres page.

/// A top-level genre and the subgenres it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenreGuide {
    pub name: &'static str,
    pub subgenres: &'static [&'static str],
}

/// The store's genre directory, in display order.
pub const GENRE_GUIDE: &[GenreGuide] = &[
    GenreGuide {
        name: "Rock",
        subgenres: &[
            "Classic Rock",
            "Psychedelic Rock",
            "Progressive Rock",
            "Art Rock",
            "Hard Rock",
            "Proto-Punk",
            "Garage Rock",
            "Surf Rock",
            "Krautrock",
            "Southern Rock",
            "Blues Rock",
        ],
    },
    GenreGuide {
        name: "Jazz",
        subgenres: &[
            "Bebop",
            "Hard Bop",
            "Cool Jazz",
            "Modal Jazz",
            "Free Jazz",
            "Jazz Fusion",
            "Smooth Jazz",
            "Swing",
            "Latin Jazz",
        ],
    },
    GenreGuide {
        name: "Soul / R&B",
        subgenres: &[
            "Classic Soul",
            "Motown",
            "Northern Soul",
            "Stax Soul",
            "Neo-Soul",
            "Funk",
            "Boogie",
            "Disco",
        ],
    },
    GenreGuide {
        name: "Blues",
        subgenres: &["Chicago Blues", "Delta Blues", "Electric Blues", "Country Blues"],
    },
    GenreGuide {
        name: "Reggae & Dub",
        subgenres: &[
            "Roots Reggae",
            "Rocksteady",
            "Lovers Rock",
            "Dub Reggae",
            "Dancehall Classics",
        ],
    },
    GenreGuide {
        name: "Hip Hop",
        subgenres: &[
            "Golden Age Hip Hop",
            "Old School Hip Hop",
            "Boom Bap",
            "Underground Hip Hop",
            "Instrumental Hip Hop",
            "Trip-Hop",
            "Turntablism",
        ],
    },
    GenreGuide {
        name: "Electronic",
        subgenres: &[
            "House",
            "Deep House",
            "Chicago House",
            "Detroit Techno",
            "Acid House",
            "Garage House",
            "Minimal Techno",
            "Breakbeat",
            "Downtempo",
            "Ambient",
            "IDM",
            "Electro (80s)",
        ],
    },
    GenreGuide {
        name: "Pop",
        subgenres: &[
            "Dream Pop",
            "Synthpop",
            "New Wave",
            "Italo Disco",
            "City Pop",
            "Baroque Pop",
            "Soft Rock",
            "Yacht Rock",
        ],
    },
    GenreGuide {
        name: "World / Cultural",
        subgenres: &[
            "Persian Funk",
            "Persian Pop 70s",
            "Turkish Psych",
            "Ethiopian Jazz",
            "Afrobeat",
            "Highlife",
            "Brazilian Bossa Nova",
            "Samba",
            "MPB",
            "Tango",
            "Flamenco",
            "Latin Soul",
            "Cumbia Classics",
        ],
    },
    GenreGuide {
        name: "Soundtracks",
        subgenres: &[
            "Film Scores (70s–90s)",
            "Horror Soundtracks",
            "Italian Giallo Soundtracks",
            "Blaxploitation Soundtracks",
            "Anime Vinyl Soundtracks",
            "Game OST Classics",
        ],
    },
    GenreGuide {
        name: "Experimental",
        subgenres: &[
            "Avant-Garde",
            "Post-Rock",
            "Shoegaze",
            "Noise Rock",
            "No Wave",
            "Minimalism",
        ],
    },
    GenreGuide {
        name: "Metal",
        subgenres: &[
            "Heavy Metal",
            "Thrash Metal",
            "Death Metal",
            "Black Metal",
            "Doom Metal",
        ],
    },
];

impl GenreGuide {
    /// Find a guide entry by name, ignoring case.
    pub fn find(name: &str) -> Option<&'static GenreGuide> {
        GENRE_GUIDE.iter().find(|g| g.name.eq_ignore_ascii_case(name))
    }
}
