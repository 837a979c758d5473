//! Keyboard adjacency data for the spatial matcher.
//!
//! Each key maps to its neighbors in layout order; the slot index encodes
//! the direction of the neighbor and a `None` keeps indices stable at the
//! board edge. Neighbor strings hold the unshifted and shifted character
//! for that key, in that order.

pub type KeyNeighbors = (char, &'static [Option<&'static str>]);

pub static QWERTY: &[KeyNeighbors] = &[
    ('`', &[None, Some("1!"), None, None, None, None]),
    ('~', &[None, Some("1!"), None, None, None, None]),
    ('1', &[Some("`~"), Some("2@"), None, None, None, Some("qQ")]),
    ('!', &[Some("`~"), Some("2@"), None, None, None, Some("qQ")]),
    ('2', &[Some("1!"), Some("3#"), None, None, Some("qQ"), Some("wW")]),
    ('@', &[Some("1!"), Some("3#"), None, None, Some("qQ"), Some("wW")]),
    ('3', &[Some("2@"), Some("4$"), None, None, Some("wW"), Some("eE")]),
    ('#', &[Some("2@"), Some("4$"), None, None, Some("wW"), Some("eE")]),
    ('4', &[Some("3#"), Some("5%"), None, None, Some("eE"), Some("rR")]),
    ('$', &[Some("3#"), Some("5%"), None, None, Some("eE"), Some("rR")]),
    ('5', &[Some("4$"), Some("6^"), None, None, Some("rR"), Some("tT")]),
    ('%', &[Some("4$"), Some("6^"), None, None, Some("rR"), Some("tT")]),
    ('6', &[Some("5%"), Some("7&"), None, None, Some("tT"), Some("yY")]),
    ('^', &[Some("5%"), Some("7&"), None, None, Some("tT"), Some("yY")]),
    ('7', &[Some("6^"), Some("8*"), None, None, Some("yY"), Some("uU")]),
    ('&', &[Some("6^"), Some("8*"), None, None, Some("yY"), Some("uU")]),
    ('8', &[Some("7&"), Some("9("), None, None, Some("uU"), Some("iI")]),
    ('*', &[Some("7&"), Some("9("), None, None, Some("uU"), Some("iI")]),
    ('9', &[Some("8*"), Some("0)"), None, None, Some("iI"), Some("oO")]),
    ('(', &[Some("8*"), Some("0)"), None, None, Some("iI"), Some("oO")]),
    ('0', &[Some("9("), Some("-_"), None, None, Some("oO"), Some("pP")]),
    (')', &[Some("9("), Some("-_"), None, None, Some("oO"), Some("pP")]),
    ('-', &[Some("0)"), Some("=+"), None, None, Some("pP"), Some("[{")]),
    ('_', &[Some("0)"), Some("=+"), None, None, Some("pP"), Some("[{")]),
    ('=', &[Some("-_"), None, None, None, Some("[{"), Some("]}")]),
    ('+', &[Some("-_"), None, None, None, Some("[{"), Some("]}")]),
    ('q', &[None, Some("wW"), Some("1!"), Some("2@"), None, Some("aA")]),
    ('Q', &[None, Some("wW"), Some("1!"), Some("2@"), None, Some("aA")]),
    ('w', &[Some("qQ"), Some("eE"), Some("2@"), Some("3#"), Some("aA"), Some("sS")]),
    ('W', &[Some("qQ"), Some("eE"), Some("2@"), Some("3#"), Some("aA"), Some("sS")]),
    ('e', &[Some("wW"), Some("rR"), Some("3#"), Some("4$"), Some("sS"), Some("dD")]),
    ('E', &[Some("wW"), Some("rR"), Some("3#"), Some("4$"), Some("sS"), Some("dD")]),
    ('r', &[Some("eE"), Some("tT"), Some("4$"), Some("5%"), Some("dD"), Some("fF")]),
    ('R', &[Some("eE"), Some("tT"), Some("4$"), Some("5%"), Some("dD"), Some("fF")]),
    ('t', &[Some("rR"), Some("yY"), Some("5%"), Some("6^"), Some("fF"), Some("gG")]),
    ('T', &[Some("rR"), Some("yY"), Some("5%"), Some("6^"), Some("fF"), Some("gG")]),
    ('y', &[Some("tT"), Some("uU"), Some("6^"), Some("7&"), Some("gG"), Some("hH")]),
    ('Y', &[Some("tT"), Some("uU"), Some("6^"), Some("7&"), Some("gG"), Some("hH")]),
    ('u', &[Some("yY"), Some("iI"), Some("7&"), Some("8*"), Some("hH"), Some("jJ")]),
    ('U', &[Some("yY"), Some("iI"), Some("7&"), Some("8*"), Some("hH"), Some("jJ")]),
    ('i', &[Some("uU"), Some("oO"), Some("8*"), Some("9("), Some("jJ"), Some("kK")]),
    ('I', &[Some("uU"), Some("oO"), Some("8*"), Some("9("), Some("jJ"), Some("kK")]),
    ('o', &[Some("iI"), Some("pP"), Some("9("), Some("0)"), Some("kK"), Some("lL")]),
    ('O', &[Some("iI"), Some("pP"), Some("9("), Some("0)"), Some("kK"), Some("lL")]),
    ('p', &[Some("oO"), Some("[{"), Some("0)"), Some("-_"), Some("lL"), Some(";:")]),
    ('P', &[Some("oO"), Some("[{"), Some("0)"), Some("-_"), Some("lL"), Some(";:")]),
    ('[', &[Some("pP"), Some("]}"), Some("-_"), Some("=+"), Some(";:"), Some("'\"")]),
    ('{', &[Some("pP"), Some("]}"), Some("-_"), Some("=+"), Some(";:"), Some("'\"")]),
    (']', &[Some("[{"), Some("\\|"), Some("=+"), None, Some("'\""), None]),
    ('}', &[Some("[{"), Some("\\|"), Some("=+"), None, Some("'\""), None]),
    ('\\', &[Some("]}"), None, None, None, None, None]),
    ('|', &[Some("]}"), None, None, None, None, None]),
    ('a', &[None, Some("sS"), Some("qQ"), Some("wW"), None, Some("zZ")]),
    ('A', &[None, Some("sS"), Some("qQ"), Some("wW"), None, Some("zZ")]),
    ('s', &[Some("aA"), Some("dD"), Some("wW"), Some("eE"), Some("zZ"), Some("xX")]),
    ('S', &[Some("aA"), Some("dD"), Some("wW"), Some("eE"), Some("zZ"), Some("xX")]),
    ('d', &[Some("sS"), Some("fF"), Some("eE"), Some("rR"), Some("xX"), Some("cC")]),
    ('D', &[Some("sS"), Some("fF"), Some("eE"), Some("rR"), Some("xX"), Some("cC")]),
    ('f', &[Some("dD"), Some("gG"), Some("rR"), Some("tT"), Some("cC"), Some("vV")]),
    ('F', &[Some("dD"), Some("gG"), Some("rR"), Some("tT"), Some("cC"), Some("vV")]),
    ('g', &[Some("fF"), Some("hH"), Some("tT"), Some("yY"), Some("vV"), Some("bB")]),
    ('G', &[Some("fF"), Some("hH"), Some("tT"), Some("yY"), Some("vV"), Some("bB")]),
    ('h', &[Some("gG"), Some("jJ"), Some("yY"), Some("uU"), Some("bB"), Some("nN")]),
    ('H', &[Some("gG"), Some("jJ"), Some("yY"), Some("uU"), Some("bB"), Some("nN")]),
    ('j', &[Some("hH"), Some("kK"), Some("uU"), Some("iI"), Some("nN"), Some("mM")]),
    ('J', &[Some("hH"), Some("kK"), Some("uU"), Some("iI"), Some("nN"), Some("mM")]),
    ('k', &[Some("jJ"), Some("lL"), Some("iI"), Some("oO"), Some("mM"), Some(",<")]),
    ('K', &[Some("jJ"), Some("lL"), Some("iI"), Some("oO"), Some("mM"), Some(",<")]),
    ('l', &[Some("kK"), Some(";:"), Some("oO"), Some("pP"), Some(",<"), Some(".>")]),
    ('L', &[Some("kK"), Some(";:"), Some("oO"), Some("pP"), Some(",<"), Some(".>")]),
    (';', &[Some("lL"), Some("'\""), Some("pP"), Some("[{"), Some(".>"), Some("/?")]),
    (':', &[Some("lL"), Some("'\""), Some("pP"), Some("[{"), Some(".>"), Some("/?")]),
    ('\'', &[Some(";:"), None, Some("[{"), Some("]}"), Some("/?"), None]),
    ('"', &[Some(";:"), None, Some("[{"), Some("]}"), Some("/?"), None]),
    ('z', &[None, Some("xX"), Some("aA"), Some("sS"), None, None]),
    ('Z', &[None, Some("xX"), Some("aA"), Some("sS"), None, None]),
    ('x', &[Some("zZ"), Some("cC"), Some("sS"), Some("dD"), None, None]),
    ('X', &[Some("zZ"), Some("cC"), Some("sS"), Some("dD"), None, None]),
    ('c', &[Some("xX"), Some("vV"), Some("dD"), Some("fF"), None, None]),
    ('C', &[Some("xX"), Some("vV"), Some("dD"), Some("fF"), None, None]),
    ('v', &[Some("cC"), Some("bB"), Some("fF"), Some("gG"), None, None]),
    ('V', &[Some("cC"), Some("bB"), Some("fF"), Some("gG"), None, None]),
    ('b', &[Some("vV"), Some("nN"), Some("gG"), Some("hH"), None, None]),
    ('B', &[Some("vV"), Some("nN"), Some("gG"), Some("hH"), None, None]),
    ('n', &[Some("bB"), Some("mM"), Some("hH"), Some("jJ"), None, None]),
    ('N', &[Some("bB"), Some("mM"), Some("hH"), Some("jJ"), None, None]),
    ('m', &[Some("nN"), Some(",<"), Some("jJ"), Some("kK"), None, None]),
    ('M', &[Some("nN"), Some(",<"), Some("jJ"), Some("kK"), None, None]),
    (',', &[Some("mM"), Some(".>"), Some("kK"), Some("lL"), None, None]),
    ('<', &[Some("mM"), Some(".>"), Some("kK"), Some("lL"), None, None]),
    ('.', &[Some(",<"), Some("/?"), Some("lL"), Some(";:"), None, None]),
    ('>', &[Some(",<"), Some("/?"), Some("lL"), Some(";:"), None, None]),
    ('/', &[Some(".>"), None, Some(";:"), Some("'\""), None, None]),
    ('?', &[Some(".>"), None, Some(";:"), Some("'\""), None, None]),
];

pub static DVORAK: &[KeyNeighbors] = &[
    ('`', &[None, Some("1!"), None, None, None, None]),
    ('~', &[None, Some("1!"), None, None, None, None]),
    ('1', &[Some("`~"), Some("2@"), None, None, None, Some("'\"")]),
    ('!', &[Some("`~"), Some("2@"), None, None, None, Some("'\"")]),
    ('2', &[Some("1!"), Some("3#"), None, None, Some("'\""), Some(",<")]),
    ('@', &[Some("1!"), Some("3#"), None, None, Some("'\""), Some(",<")]),
    ('3', &[Some("2@"), Some("4$"), None, None, Some(",<"), Some(".>")]),
    ('#', &[Some("2@"), Some("4$"), None, None, Some(",<"), Some(".>")]),
    ('4', &[Some("3#"), Some("5%"), None, None, Some(".>"), Some("pP")]),
    ('$', &[Some("3#"), Some("5%"), None, None, Some(".>"), Some("pP")]),
    ('5', &[Some("4$"), Some("6^"), None, None, Some("pP"), Some("yY")]),
    ('%', &[Some("4$"), Some("6^"), None, None, Some("pP"), Some("yY")]),
    ('6', &[Some("5%"), Some("7&"), None, None, Some("yY"), Some("fF")]),
    ('^', &[Some("5%"), Some("7&"), None, None, Some("yY"), Some("fF")]),
    ('7', &[Some("6^"), Some("8*"), None, None, Some("fF"), Some("gG")]),
    ('&', &[Some("6^"), Some("8*"), None, None, Some("fF"), Some("gG")]),
    ('8', &[Some("7&"), Some("9("), None, None, Some("gG"), Some("cC")]),
    ('*', &[Some("7&"), Some("9("), None, None, Some("gG"), Some("cC")]),
    ('9', &[Some("8*"), Some("0)"), None, None, Some("cC"), Some("rR")]),
    ('(', &[Some("8*"), Some("0)"), None, None, Some("cC"), Some("rR")]),
    ('0', &[Some("9("), Some("[{"), None, None, Some("rR"), Some("lL")]),
    (')', &[Some("9("), Some("[{"), None, None, Some("rR"), Some("lL")]),
    ('[', &[Some("0)"), Some("]}"), None, None, Some("lL"), Some("/?")]),
    ('{', &[Some("0)"), Some("]}"), None, None, Some("lL"), Some("/?")]),
    (']', &[Some("[{"), None, None, None, Some("/?"), Some("=+")]),
    ('}', &[Some("[{"), None, None, None, Some("/?"), Some("=+")]),
    ('\'', &[None, Some(",<"), Some("1!"), Some("2@"), None, Some("aA")]),
    ('"', &[None, Some(",<"), Some("1!"), Some("2@"), None, Some("aA")]),
    (',', &[Some("'\""), Some(".>"), Some("2@"), Some("3#"), Some("aA"), Some("oO")]),
    ('<', &[Some("'\""), Some(".>"), Some("2@"), Some("3#"), Some("aA"), Some("oO")]),
    ('.', &[Some(",<"), Some("pP"), Some("3#"), Some("4$"), Some("oO"), Some("eE")]),
    ('>', &[Some(",<"), Some("pP"), Some("3#"), Some("4$"), Some("oO"), Some("eE")]),
    ('p', &[Some(".>"), Some("yY"), Some("4$"), Some("5%"), Some("eE"), Some("uU")]),
    ('P', &[Some(".>"), Some("yY"), Some("4$"), Some("5%"), Some("eE"), Some("uU")]),
    ('y', &[Some("pP"), Some("fF"), Some("5%"), Some("6^"), Some("uU"), Some("iI")]),
    ('Y', &[Some("pP"), Some("fF"), Some("5%"), Some("6^"), Some("uU"), Some("iI")]),
    ('f', &[Some("yY"), Some("gG"), Some("6^"), Some("7&"), Some("iI"), Some("dD")]),
    ('F', &[Some("yY"), Some("gG"), Some("6^"), Some("7&"), Some("iI"), Some("dD")]),
    ('g', &[Some("fF"), Some("cC"), Some("7&"), Some("8*"), Some("dD"), Some("hH")]),
    ('G', &[Some("fF"), Some("cC"), Some("7&"), Some("8*"), Some("dD"), Some("hH")]),
    ('c', &[Some("gG"), Some("rR"), Some("8*"), Some("9("), Some("hH"), Some("tT")]),
    ('C', &[Some("gG"), Some("rR"), Some("8*"), Some("9("), Some("hH"), Some("tT")]),
    ('r', &[Some("cC"), Some("lL"), Some("9("), Some("0)"), Some("tT"), Some("nN")]),
    ('R', &[Some("cC"), Some("lL"), Some("9("), Some("0)"), Some("tT"), Some("nN")]),
    ('l', &[Some("rR"), Some("/?"), Some("0)"), Some("[{"), Some("nN"), Some("sS")]),
    ('L', &[Some("rR"), Some("/?"), Some("0)"), Some("[{"), Some("nN"), Some("sS")]),
    ('/', &[Some("lL"), Some("=+"), Some("[{"), Some("]}"), Some("sS"), Some("-_")]),
    ('?', &[Some("lL"), Some("=+"), Some("[{"), Some("]}"), Some("sS"), Some("-_")]),
    ('=', &[Some("/?"), Some("\\|"), Some("]}"), None, Some("-_"), None]),
    ('+', &[Some("/?"), Some("\\|"), Some("]}"), None, Some("-_"), None]),
    ('\\', &[Some("=+"), None, None, None, None, None]),
    ('|', &[Some("=+"), None, None, None, None, None]),
    ('a', &[None, Some("oO"), Some("'\""), Some(",<"), None, Some(";:")]),
    ('A', &[None, Some("oO"), Some("'\""), Some(",<"), None, Some(";:")]),
    ('o', &[Some("aA"), Some("eE"), Some(",<"), Some(".>"), Some(";:"), Some("qQ")]),
    ('O', &[Some("aA"), Some("eE"), Some(",<"), Some(".>"), Some(";:"), Some("qQ")]),
    ('e', &[Some("oO"), Some("uU"), Some(".>"), Some("pP"), Some("qQ"), Some("jJ")]),
    ('E', &[Some("oO"), Some("uU"), Some(".>"), Some("pP"), Some("qQ"), Some("jJ")]),
    ('u', &[Some("eE"), Some("iI"), Some("pP"), Some("yY"), Some("jJ"), Some("kK")]),
    ('U', &[Some("eE"), Some("iI"), Some("pP"), Some("yY"), Some("jJ"), Some("kK")]),
    ('i', &[Some("uU"), Some("dD"), Some("yY"), Some("fF"), Some("kK"), Some("xX")]),
    ('I', &[Some("uU"), Some("dD"), Some("yY"), Some("fF"), Some("kK"), Some("xX")]),
    ('d', &[Some("iI"), Some("hH"), Some("fF"), Some("gG"), Some("xX"), Some("bB")]),
    ('D', &[Some("iI"), Some("hH"), Some("fF"), Some("gG"), Some("xX"), Some("bB")]),
    ('h', &[Some("dD"), Some("tT"), Some("gG"), Some("cC"), Some("bB"), Some("mM")]),
    ('H', &[Some("dD"), Some("tT"), Some("gG"), Some("cC"), Some("bB"), Some("mM")]),
    ('t', &[Some("hH"), Some("nN"), Some("cC"), Some("rR"), Some("mM"), Some("wW")]),
    ('T', &[Some("hH"), Some("nN"), Some("cC"), Some("rR"), Some("mM"), Some("wW")]),
    ('n', &[Some("tT"), Some("sS"), Some("rR"), Some("lL"), Some("wW"), Some("vV")]),
    ('N', &[Some("tT"), Some("sS"), Some("rR"), Some("lL"), Some("wW"), Some("vV")]),
    ('s', &[Some("nN"), Some("-_"), Some("lL"), Some("/?"), Some("vV"), Some("zZ")]),
    ('S', &[Some("nN"), Some("-_"), Some("lL"), Some("/?"), Some("vV"), Some("zZ")]),
    ('-', &[Some("sS"), None, Some("/?"), Some("=+"), Some("zZ"), None]),
    ('_', &[Some("sS"), None, Some("/?"), Some("=+"), Some("zZ"), None]),
    (';', &[None, Some("qQ"), Some("aA"), Some("oO"), None, None]),
    (':', &[None, Some("qQ"), Some("aA"), Some("oO"), None, None]),
    ('q', &[Some(";:"), Some("jJ"), Some("oO"), Some("eE"), None, None]),
    ('Q', &[Some(";:"), Some("jJ"), Some("oO"), Some("eE"), None, None]),
    ('j', &[Some("qQ"), Some("kK"), Some("eE"), Some("uU"), None, None]),
    ('J', &[Some("qQ"), Some("kK"), Some("eE"), Some("uU"), None, None]),
    ('k', &[Some("jJ"), Some("xX"), Some("uU"), Some("iI"), None, None]),
    ('K', &[Some("jJ"), Some("xX"), Some("uU"), Some("iI"), None, None]),
    ('x', &[Some("kK"), Some("bB"), Some("iI"), Some("dD"), None, None]),
    ('X', &[Some("kK"), Some("bB"), Some("iI"), Some("dD"), None, None]),
    ('b', &[Some("xX"), Some("mM"), Some("dD"), Some("hH"), None, None]),
    ('B', &[Some("xX"), Some("mM"), Some("dD"), Some("hH"), None, None]),
    ('m', &[Some("bB"), Some("wW"), Some("hH"), Some("tT"), None, None]),
    ('M', &[Some("bB"), Some("wW"), Some("hH"), Some("tT"), None, None]),
    ('w', &[Some("mM"), Some("vV"), Some("tT"), Some("nN"), None, None]),
    ('W', &[Some("mM"), Some("vV"), Some("tT"), Some("nN"), None, None]),
    ('v', &[Some("wW"), Some("zZ"), Some("nN"), Some("sS"), None, None]),
    ('V', &[Some("wW"), Some("zZ"), Some("nN"), Some("sS"), None, None]),
    ('z', &[Some("vV"), None, Some("sS"), Some("-_"), None, None]),
    ('Z', &[Some("vV"), None, Some("sS"), Some("-_"), None, None]),
];

pub static KEYPAD: &[KeyNeighbors] = &[
    ('/', &[None, None, None, None, Some("*"), Some("7"), Some("8"), Some("9")]),
    ('*', &[None, None, None, Some("/"), Some("-"), Some("8"), Some("9"), Some("+")]),
    ('-', &[None, None, None, Some("*"), None, Some("9"), Some("+"), None]),
    ('7', &[None, None, Some("/"), None, Some("8"), None, Some("4"), Some("5")]),
    ('8', &[None, Some("/"), Some("*"), Some("7"), Some("9"), Some("4"), Some("5"), Some("6")]),
    ('9', &[Some("/"), Some("*"), Some("-"), Some("8"), Some("+"), Some("5"), Some("6"), None]),
    ('+', &[Some("*"), Some("-"), None, Some("9"), None, Some("6"), None, None]),
    ('4', &[None, Some("7"), Some("8"), None, Some("5"), None, Some("1"), Some("2")]),
    ('5', &[Some("7"), Some("8"), Some("9"), Some("4"), Some("6"), Some("1"), Some("2"), Some("3")]),
    ('6', &[Some("8"), Some("9"), Some("+"), Some("5"), None, Some("2"), Some("3"), None]),
    ('1', &[None, Some("4"), Some("5"), None, Some("2"), None, None, Some("0")]),
    ('2', &[Some("4"), Some("5"), Some("6"), Some("1"), Some("3"), None, Some("0"), Some(".")]),
    ('3', &[Some("5"), Some("6"), None, Some("2"), None, Some("0"), Some("."), None]),
    ('0', &[Some("1"), Some("2"), Some("3"), None, Some("."), None, None, None]),
    ('.', &[Some("2"), Some("3"), None, Some("0"), None, None, None, None]),
];

pub static MAC_KEYPAD: &[KeyNeighbors] = &[
    ('=', &[None, None, None, None, Some("/"), Some("7"), Some("8"), Some("9")]),
    ('/', &[None, None, None, Some("="), Some("*"), Some("8"), Some("9"), Some("-")]),
    ('*', &[None, None, None, Some("/"), None, Some("9"), Some("-"), None]),
    ('7', &[None, None, Some("="), None, Some("8"), None, Some("4"), Some("5")]),
    ('8', &[None, Some("="), Some("/"), Some("7"), Some("9"), Some("4"), Some("5"), Some("6")]),
    ('9', &[Some("="), Some("/"), Some("*"), Some("8"), Some("-"), Some("5"), Some("6"), Some("+")]),
    ('-', &[Some("/"), Some("*"), None, Some("9"), None, Some("6"), Some("+"), None]),
    ('4', &[None, Some("7"), Some("8"), None, Some("5"), None, Some("1"), Some("2")]),
    ('5', &[Some("7"), Some("8"), Some("9"), Some("4"), Some("6"), Some("1"), Some("2"), Some("3")]),
    ('6', &[Some("8"), Some("9"), Some("-"), Some("5"), Some("+"), Some("2"), Some("3"), None]),
    ('+', &[Some("9"), Some("-"), None, Some("6"), None, Some("3"), None, None]),
    ('1', &[None, Some("4"), Some("5"), None, Some("2"), None, None, Some("0")]),
    ('2', &[Some("4"), Some("5"), Some("6"), Some("1"), Some("3"), None, Some("0"), Some(".")]),
    ('3', &[Some("5"), Some("6"), Some("+"), Some("2"), None, Some("0"), Some("."), None]),
    ('0', &[Some("1"), Some("2"), Some("3"), None, Some("."), None, None, None]),
    ('.', &[Some("2"), Some("3"), None, Some("0"), None, None, None, None]),
];
