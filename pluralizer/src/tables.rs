//! Literal rule data.
//!
//! Both tables are consumed by [`RuleTable`](crate::RuleTable) at first use. They are
//! public so callers can inspect exactly what the engine knows about.

/// Nouns whose plural cannot be derived by a suffix rule.
///
/// Each row is `(singular, plural, alternate plural)`. An empty plural means the word
/// does not change between singular and plural; an empty alternate means there is none.
/// The first plural is the one [`pluralize`](crate::pluralize) produces, and both are
/// recognized by [`singularize`](crate::singularize).
pub static IRREGULAR_WORDS: &[(&str, &str, &str)] = &[
    ("agendum", "agenda", ""),
    ("albino", "albinos", ""),
    ("alga", "algae", ""),
    ("alumna", "alumnae", ""),
    ("apex", "apices", "apexes"),
    ("archipelago", "archipelagos", ""),
    ("bacterium", "bacteria", ""),
    ("beef", "beefs", "beeves"),
    ("bison", "", ""),
    ("brother", "brothers", "brethren"),
    ("candelabrum", "candelabra", ""),
    ("carp", "", ""),
    ("casino", "casinos", ""),
    ("child", "children", ""),
    ("chassis", "", ""),
    ("chinese", "", ""),
    ("clippers", "", ""),
    ("cod", "", ""),
    ("codex", "codices", ""),
    ("commando", "commandos", ""),
    ("corps", "", ""),
    ("cortex", "cortices", "cortexes"),
    ("cow", "cows", "kine"),
    ("criterion", "criteria", ""),
    ("datum", "data", ""),
    ("debris", "", ""),
    ("diabetes", "", ""),
    ("ditto", "dittos", ""),
    ("djinn", "", ""),
    ("dynamo", "", ""),
    ("elk", "", ""),
    ("embryo", "embryos", ""),
    ("ephemeris", "ephemeris", "ephemerides"),
    ("erratum", "errata", ""),
    ("extremum", "extrema", ""),
    ("fiasco", "fiascos", ""),
    ("fish", "fishes", "fish"),
    ("flounder", "", ""),
    ("focus", "foci", "focuses"),
    ("fungus", "fungi", "funguses"),
    ("gallows", "", ""),
    ("genie", "genies", "genii"),
    ("ghetto", "ghettos", ""),
    ("graffiti", "", ""),
    ("headquarters", "", ""),
    ("herpes", "", ""),
    ("homework", "", ""),
    ("index", "indices", "indexes"),
    ("inferno", "infernos", ""),
    ("japanese", "", ""),
    ("jumbo", "jumbos", ""),
    ("latex", "latices", "latexes"),
    ("lingo", "lingos", ""),
    ("mackerel", "", ""),
    ("macro", "macros", ""),
    ("manifesto", "manifestos", ""),
    ("measles", "", ""),
    ("money", "moneys", "monies"),
    ("mongoose", "mongooses", "mongoose"),
    ("mumps", "", ""),
    ("murex", "murecis", ""),
    ("mythos", "mythoi", ""),
    ("news", "", ""),
    ("octopus", "octopuses", "octopodes"),
    ("ovum", "ova", ""),
    ("ox", "oxen", ""),
    ("photo", "photos", ""),
    ("pincers", "", ""),
    ("pliers", "", ""),
    ("pro", "pros", ""),
    ("rabies", "", ""),
    ("radius", "radii", "radiuses"),
    ("rhino", "rhinos", ""),
    ("salmon", "", ""),
    ("scissors", "", ""),
    ("series", "", ""),
    ("shears", "", ""),
    ("silex", "silices", ""),
    ("simplex", "simplices", "simplexes"),
    ("soliloquy", "soliloquies", "soliloquy"),
    ("species", "", ""),
    ("stratum", "strata", ""),
    ("swine", "", ""),
    ("trout", "", ""),
    ("tuna", "", ""),
    ("vertebra", "vertebrae", ""),
    ("vertex", "vertices", "vertexes"),
    ("vortex", "vortices", "vortexes"),
];

/// Suffix rewrites as `(singular suffix, plural suffix)`.
///
/// Order matters: the first row whose suffix matches wins. Vowel-preceded `y` and `o`
/// rows sit above the bare `y` and `o` rows, and `pox` sits above `ox`.
pub static SUFFIX_RULES: &[(&str, &str)] = &[
    ("ch", "ches"),
    ("sh", "shes"),
    ("ss", "sses"),
    //
    ("ay", "ays"),
    ("ey", "eys"),
    ("iy", "iys"),
    ("oy", "oys"),
    ("uy", "uys"),
    ("y", "ies"),
    //
    ("ao", "aos"),
    ("eo", "eos"),
    ("io", "ios"),
    ("oo", "oos"),
    ("uo", "uos"),
    ("o", "oes"),
    //
    ("cis", "ces"),
    ("sis", "ses"),
    ("xis", "xes"),
    //
    ("louse", "lice"),
    ("mouse", "mice"),
    ("zoon", "zoa"),
    ("man", "men"),
    //
    ("deer", "deer"),
    ("fish", "fish"),
    ("sheep", "sheep"),
    ("itis", "itis"),
    ("ois", "ois"),
    ("pox", "pox"),
    ("ox", "oxes"),
    //
    ("foot", "feet"),
    ("goose", "geese"),
    ("tooth", "teeth"),
    //
    ("alf", "alves"),
    ("elf", "elves"),
    ("olf", "olves"),
    ("arf", "arves"),
    ("leaf", "leaves"),
    ("nife", "nives"),
    ("life", "lives"),
    ("wife", "wives"),
];
