//! Named character reference table.
//!
//! The full WHATWG set: 2,231 entries, sorted by name so that lookup is a
//! binary search and longest-match resolution can probe progressively shorter
//! prefixes. Entries come in `name;` form and, for the legacy subset, a bare
//! `name` form; a handful of references expand to two codepoints.
//!
//! Do not edit by hand; regenerate from the WHATWG `entities.json` data.

/// One named character reference.
///
/// `name` omits the leading `&` and includes the trailing `;` where the
/// reference requires one.
pub(crate) struct NamedReference {
    pub(crate) name: &'static str,
    pub(crate) first: char,
    pub(crate) second: Option<char>,
}

const fn r(name: &'static str, first: char, second: Option<char>) -> NamedReference {
    NamedReference {
        name,
        first,
        second,
    }
}

/// Length in bytes of the longest reference name, semicolon included.
pub(crate) const LONGEST_REFERENCE_NAME: usize = 32;

/// Exact-name lookup. Case-sensitive; reference names are not case-folded.
pub(crate) fn lookup(name: &[u8]) -> Option<&'static NamedReference> {
    NAMED_REFERENCES
        .binary_search_by(|entry| entry.name.as_bytes().cmp(name))
        .ok()
        .map(|index| &NAMED_REFERENCES[index])
}

pub(crate) static NAMED_REFERENCES: &[NamedReference] = &[
    r("AElig", '\u{C6}', None),
    r("AElig;", '\u{C6}', None),
    r("AMP", '\u{26}', None),
    r("AMP;", '\u{26}', None),
    r("Aacute", '\u{C1}', None),
    r("Aacute;", '\u{C1}', None),
    r("Abreve;", '\u{102}', None),
    r("Acirc", '\u{C2}', None),
    r("Acirc;", '\u{C2}', None),
    r("Acy;", '\u{410}', None),
    r("Afr;", '\u{1D504}', None),
    r("Agrave", '\u{C0}', None),
    r("Agrave;", '\u{C0}', None),
    r("Alpha;", '\u{391}', None),
    r("Amacr;", '\u{100}', None),
    r("And;", '\u{2A53}', None),
    r("Aogon;", '\u{104}', None),
    r("Aopf;", '\u{1D538}', None),
    r("ApplyFunction;", '\u{2061}', None),
    r("Aring", '\u{C5}', None),
    r("Aring;", '\u{C5}', None),
    r("Ascr;", '\u{1D49C}', None),
    r("Assign;", '\u{2254}', None),
    r("Atilde", '\u{C3}', None),
    r("Atilde;", '\u{C3}', None),
    r("Auml", '\u{C4}', None),
    r("Auml;", '\u{C4}', None),
    r("Backslash;", '\u{2216}', None),
    r("Barv;", '\u{2AE7}', None),
    r("Barwed;", '\u{2306}', None),
    r("Bcy;", '\u{411}', None),
    r("Because;", '\u{2235}', None),
    r("Bernoullis;", '\u{212C}', None),
    r("Beta;", '\u{392}', None),
    r("Bfr;", '\u{1D505}', None),
    r("Bopf;", '\u{1D539}', None),
    r("Breve;", '\u{2D8}', None),
    r("Bscr;", '\u{212C}', None),
    r("Bumpeq;", '\u{224E}', None),
    r("CHcy;", '\u{427}', None),
    r("COPY", '\u{A9}', None),
    r("COPY;", '\u{A9}', None),
    r("Cacute;", '\u{106}', None),
    r("Cap;", '\u{22D2}', None),
    r("CapitalDifferentialD;", '\u{2145}', None),
    r("Cayleys;", '\u{212D}', None),
    r("Ccaron;", '\u{10C}', None),
    r("Ccedil", '\u{C7}', None),
    r("Ccedil;", '\u{C7}', None),
    r("Ccirc;", '\u{108}', None),
    r("Cconint;", '\u{2230}', None),
    r("Cdot;", '\u{10A}', None),
    r("Cedilla;", '\u{B8}', None),
    r("CenterDot;", '\u{B7}', None),
    r("Cfr;", '\u{212D}', None),
    r("Chi;", '\u{3A7}', None),
    r("CircleDot;", '\u{2299}', None),
    r("CircleMinus;", '\u{2296}', None),
    r("CirclePlus;", '\u{2295}', None),
    r("CircleTimes;", '\u{2297}', None),
    r("ClockwiseContourIntegral;", '\u{2232}', None),
    r("CloseCurlyDoubleQuote;", '\u{201D}', None),
    r("CloseCurlyQuote;", '\u{2019}', None),
    r("Colon;", '\u{2237}', None),
    r("Colone;", '\u{2A74}', None),
    r("Congruent;", '\u{2261}', None),
    r("Conint;", '\u{222F}', None),
    r("ContourIntegral;", '\u{222E}', None),
    r("Copf;", '\u{2102}', None),
    r("Coproduct;", '\u{2210}', None),
    r("CounterClockwiseContourIntegral;", '\u{2233}', None),
    r("Cross;", '\u{2A2F}', None),
    r("Cscr;", '\u{1D49E}', None),
    r("Cup;", '\u{22D3}', None),
    r("CupCap;", '\u{224D}', None),
    r("DD;", '\u{2145}', None),
    r("DDotrahd;", '\u{2911}', None),
    r("DJcy;", '\u{402}', None),
    r("DScy;", '\u{405}', None),
    r("DZcy;", '\u{40F}', None),
    r("Dagger;", '\u{2021}', None),
    r("Darr;", '\u{21A1}', None),
    r("Dashv;", '\u{2AE4}', None),
    r("Dcaron;", '\u{10E}', None),
    r("Dcy;", '\u{414}', None),
    r("Del;", '\u{2207}', None),
    r("Delta;", '\u{394}', None),
    r("Dfr;", '\u{1D507}', None),
    r("DiacriticalAcute;", '\u{B4}', None),
    r("DiacriticalDot;", '\u{2D9}', None),
    r("DiacriticalDoubleAcute;", '\u{2DD}', None),
    r("DiacriticalGrave;", '\u{60}', None),
    r("DiacriticalTilde;", '\u{2DC}', None),
    r("Diamond;", '\u{22C4}', None),
    r("DifferentialD;", '\u{2146}', None),
    r("Dopf;", '\u{1D53B}', None),
    r("Dot;", '\u{A8}', None),
    r("DotDot;", '\u{20DC}', None),
    r("DotEqual;", '\u{2250}', None),
    r("DoubleContourIntegral;", '\u{222F}', None),
    r("DoubleDot;", '\u{A8}', None),
    r("DoubleDownArrow;", '\u{21D3}', None),
    r("DoubleLeftArrow;", '\u{21D0}', None),
    r("DoubleLeftRightArrow;", '\u{21D4}', None),
    r("DoubleLeftTee;", '\u{2AE4}', None),
    r("DoubleLongLeftArrow;", '\u{27F8}', None),
    r("DoubleLongLeftRightArrow;", '\u{27FA}', None),
    r("DoubleLongRightArrow;", '\u{27F9}', None),
    r("DoubleRightArrow;", '\u{21D2}', None),
    r("DoubleRightTee;", '\u{22A8}', None),
    r("DoubleUpArrow;", '\u{21D1}', None),
    r("DoubleUpDownArrow;", '\u{21D5}', None),
    r("DoubleVerticalBar;", '\u{2225}', None),
    r("DownArrow;", '\u{2193}', None),
    r("DownArrowBar;", '\u{2913}', None),
    r("DownArrowUpArrow;", '\u{21F5}', None),
    r("DownBreve;", '\u{311}', None),
    r("DownLeftRightVector;", '\u{2950}', None),
    r("DownLeftTeeVector;", '\u{295E}', None),
    r("DownLeftVector;", '\u{21BD}', None),
    r("DownLeftVectorBar;", '\u{2956}', None),
    r("DownRightTeeVector;", '\u{295F}', None),
    r("DownRightVector;", '\u{21C1}', None),
    r("DownRightVectorBar;", '\u{2957}', None),
    r("DownTee;", '\u{22A4}', None),
    r("DownTeeArrow;", '\u{21A7}', None),
    r("Downarrow;", '\u{21D3}', None),
    r("Dscr;", '\u{1D49F}', None),
    r("Dstrok;", '\u{110}', None),
    r("ENG;", '\u{14A}', None),
    r("ETH", '\u{D0}', None),
    r("ETH;", '\u{D0}', None),
    r("Eacute", '\u{C9}', None),
    r("Eacute;", '\u{C9}', None),
    r("Ecaron;", '\u{11A}', None),
    r("Ecirc", '\u{CA}', None),
    r("Ecirc;", '\u{CA}', None),
    r("Ecy;", '\u{42D}', None),
    r("Edot;", '\u{116}', None),
    r("Efr;", '\u{1D508}', None),
    r("Egrave", '\u{C8}', None),
    r("Egrave;", '\u{C8}', None),
    r("Element;", '\u{2208}', None),
    r("Emacr;", '\u{112}', None),
    r("EmptySmallSquare;", '\u{25FB}', None),
    r("EmptyVerySmallSquare;", '\u{25AB}', None),
    r("Eogon;", '\u{118}', None),
    r("Eopf;", '\u{1D53C}', None),
    r("Epsilon;", '\u{395}', None),
    r("Equal;", '\u{2A75}', None),
    r("EqualTilde;", '\u{2242}', None),
    r("Equilibrium;", '\u{21CC}', None),
    r("Escr;", '\u{2130}', None),
    r("Esim;", '\u{2A73}', None),
    r("Eta;", '\u{397}', None),
    r("Euml", '\u{CB}', None),
    r("Euml;", '\u{CB}', None),
    r("Exists;", '\u{2203}', None),
    r("ExponentialE;", '\u{2147}', None),
    r("Fcy;", '\u{424}', None),
    r("Ffr;", '\u{1D509}', None),
    r("FilledSmallSquare;", '\u{25FC}', None),
    r("FilledVerySmallSquare;", '\u{25AA}', None),
    r("Fopf;", '\u{1D53D}', None),
    r("ForAll;", '\u{2200}', None),
    r("Fouriertrf;", '\u{2131}', None),
    r("Fscr;", '\u{2131}', None),
    r("GJcy;", '\u{403}', None),
    r("GT", '\u{3E}', None),
    r("GT;", '\u{3E}', None),
    r("Gamma;", '\u{393}', None),
    r("Gammad;", '\u{3DC}', None),
    r("Gbreve;", '\u{11E}', None),
    r("Gcedil;", '\u{122}', None),
    r("Gcirc;", '\u{11C}', None),
    r("Gcy;", '\u{413}', None),
    r("Gdot;", '\u{120}', None),
    r("Gfr;", '\u{1D50A}', None),
    r("Gg;", '\u{22D9}', None),
    r("Gopf;", '\u{1D53E}', None),
    r("GreaterEqual;", '\u{2265}', None),
    r("GreaterEqualLess;", '\u{22DB}', None),
    r("GreaterFullEqual;", '\u{2267}', None),
    r("GreaterGreater;", '\u{2AA2}', None),
    r("GreaterLess;", '\u{2277}', None),
    r("GreaterSlantEqual;", '\u{2A7E}', None),
    r("GreaterTilde;", '\u{2273}', None),
    r("Gscr;", '\u{1D4A2}', None),
    r("Gt;", '\u{226B}', None),
    r("HARDcy;", '\u{42A}', None),
    r("Hacek;", '\u{2C7}', None),
    r("Hat;", '\u{5E}', None),
    r("Hcirc;", '\u{124}', None),
    r("Hfr;", '\u{210C}', None),
    r("HilbertSpace;", '\u{210B}', None),
    r("Hopf;", '\u{210D}', None),
    r("HorizontalLine;", '\u{2500}', None),
    r("Hscr;", '\u{210B}', None),
    r("Hstrok;", '\u{126}', None),
    r("HumpDownHump;", '\u{224E}', None),
    r("HumpEqual;", '\u{224F}', None),
    r("IEcy;", '\u{415}', None),
    r("IJlig;", '\u{132}', None),
    r("IOcy;", '\u{401}', None),
    r("Iacute", '\u{CD}', None),
    r("Iacute;", '\u{CD}', None),
    r("Icirc", '\u{CE}', None),
    r("Icirc;", '\u{CE}', None),
    r("Icy;", '\u{418}', None),
    r("Idot;", '\u{130}', None),
    r("Ifr;", '\u{2111}', None),
    r("Igrave", '\u{CC}', None),
    r("Igrave;", '\u{CC}', None),
    r("Im;", '\u{2111}', None),
    r("Imacr;", '\u{12A}', None),
    r("ImaginaryI;", '\u{2148}', None),
    r("Implies;", '\u{21D2}', None),
    r("Int;", '\u{222C}', None),
    r("Integral;", '\u{222B}', None),
    r("Intersection;", '\u{22C2}', None),
    r("InvisibleComma;", '\u{2063}', None),
    r("InvisibleTimes;", '\u{2062}', None),
    r("Iogon;", '\u{12E}', None),
    r("Iopf;", '\u{1D540}', None),
    r("Iota;", '\u{399}', None),
    r("Iscr;", '\u{2110}', None),
    r("Itilde;", '\u{128}', None),
    r("Iukcy;", '\u{406}', None),
    r("Iuml", '\u{CF}', None),
    r("Iuml;", '\u{CF}', None),
    r("Jcirc;", '\u{134}', None),
    r("Jcy;", '\u{419}', None),
    r("Jfr;", '\u{1D50D}', None),
    r("Jopf;", '\u{1D541}', None),
    r("Jscr;", '\u{1D4A5}', None),
    r("Jsercy;", '\u{408}', None),
    r("Jukcy;", '\u{404}', None),
    r("KHcy;", '\u{425}', None),
    r("KJcy;", '\u{40C}', None),
    r("Kappa;", '\u{39A}', None),
    r("Kcedil;", '\u{136}', None),
    r("Kcy;", '\u{41A}', None),
    r("Kfr;", '\u{1D50E}', None),
    r("Kopf;", '\u{1D542}', None),
    r("Kscr;", '\u{1D4A6}', None),
    r("LJcy;", '\u{409}', None),
    r("LT", '\u{3C}', None),
    r("LT;", '\u{3C}', None),
    r("Lacute;", '\u{139}', None),
    r("Lambda;", '\u{39B}', None),
    r("Lang;", '\u{27EA}', None),
    r("Laplacetrf;", '\u{2112}', None),
    r("Larr;", '\u{219E}', None),
    r("Lcaron;", '\u{13D}', None),
    r("Lcedil;", '\u{13B}', None),
    r("Lcy;", '\u{41B}', None),
    r("LeftAngleBracket;", '\u{27E8}', None),
    r("LeftArrow;", '\u{2190}', None),
    r("LeftArrowBar;", '\u{21E4}', None),
    r("LeftArrowRightArrow;", '\u{21C6}', None),
    r("LeftCeiling;", '\u{2308}', None),
    r("LeftDoubleBracket;", '\u{27E6}', None),
    r("LeftDownTeeVector;", '\u{2961}', None),
    r("LeftDownVector;", '\u{21C3}', None),
    r("LeftDownVectorBar;", '\u{2959}', None),
    r("LeftFloor;", '\u{230A}', None),
    r("LeftRightArrow;", '\u{2194}', None),
    r("LeftRightVector;", '\u{294E}', None),
    r("LeftTee;", '\u{22A3}', None),
    r("LeftTeeArrow;", '\u{21A4}', None),
    r("LeftTeeVector;", '\u{295A}', None),
    r("LeftTriangle;", '\u{22B2}', None),
    r("LeftTriangleBar;", '\u{29CF}', None),
    r("LeftTriangleEqual;", '\u{22B4}', None),
    r("LeftUpDownVector;", '\u{2951}', None),
    r("LeftUpTeeVector;", '\u{2960}', None),
    r("LeftUpVector;", '\u{21BF}', None),
    r("LeftUpVectorBar;", '\u{2958}', None),
    r("LeftVector;", '\u{21BC}', None),
    r("LeftVectorBar;", '\u{2952}', None),
    r("Leftarrow;", '\u{21D0}', None),
    r("Leftrightarrow;", '\u{21D4}', None),
    r("LessEqualGreater;", '\u{22DA}', None),
    r("LessFullEqual;", '\u{2266}', None),
    r("LessGreater;", '\u{2276}', None),
    r("LessLess;", '\u{2AA1}', None),
    r("LessSlantEqual;", '\u{2A7D}', None),
    r("LessTilde;", '\u{2272}', None),
    r("Lfr;", '\u{1D50F}', None),
    r("Ll;", '\u{22D8}', None),
    r("Lleftarrow;", '\u{21DA}', None),
    r("Lmidot;", '\u{13F}', None),
    r("LongLeftArrow;", '\u{27F5}', None),
    r("LongLeftRightArrow;", '\u{27F7}', None),
    r("LongRightArrow;", '\u{27F6}', None),
    r("Longleftarrow;", '\u{27F8}', None),
    r("Longleftrightarrow;", '\u{27FA}', None),
    r("Longrightarrow;", '\u{27F9}', None),
    r("Lopf;", '\u{1D543}', None),
    r("LowerLeftArrow;", '\u{2199}', None),
    r("LowerRightArrow;", '\u{2198}', None),
    r("Lscr;", '\u{2112}', None),
    r("Lsh;", '\u{21B0}', None),
    r("Lstrok;", '\u{141}', None),
    r("Lt;", '\u{226A}', None),
    r("Map;", '\u{2905}', None),
    r("Mcy;", '\u{41C}', None),
    r("MediumSpace;", '\u{205F}', None),
    r("Mellintrf;", '\u{2133}', None),
    r("Mfr;", '\u{1D510}', None),
    r("MinusPlus;", '\u{2213}', None),
    r("Mopf;", '\u{1D544}', None),
    r("Mscr;", '\u{2133}', None),
    r("Mu;", '\u{39C}', None),
    r("NJcy;", '\u{40A}', None),
    r("Nacute;", '\u{143}', None),
    r("Ncaron;", '\u{147}', None),
    r("Ncedil;", '\u{145}', None),
    r("Ncy;", '\u{41D}', None),
    r("NegativeMediumSpace;", '\u{200B}', None),
    r("NegativeThickSpace;", '\u{200B}', None),
    r("NegativeThinSpace;", '\u{200B}', None),
    r("NegativeVeryThinSpace;", '\u{200B}', None),
    r("NestedGreaterGreater;", '\u{226B}', None),
    r("NestedLessLess;", '\u{226A}', None),
    r("NewLine;", '\u{A}', None),
    r("Nfr;", '\u{1D511}', None),
    r("NoBreak;", '\u{2060}', None),
    r("NonBreakingSpace;", '\u{A0}', None),
    r("Nopf;", '\u{2115}', None),
    r("Not;", '\u{2AEC}', None),
    r("NotCongruent;", '\u{2262}', None),
    r("NotCupCap;", '\u{226D}', None),
    r("NotDoubleVerticalBar;", '\u{2226}', None),
    r("NotElement;", '\u{2209}', None),
    r("NotEqual;", '\u{2260}', None),
    r("NotEqualTilde;", '\u{2242}', Some('\u{338}')),
    r("NotExists;", '\u{2204}', None),
    r("NotGreater;", '\u{226F}', None),
    r("NotGreaterEqual;", '\u{2271}', None),
    r("NotGreaterFullEqual;", '\u{2267}', Some('\u{338}')),
    r("NotGreaterGreater;", '\u{226B}', Some('\u{338}')),
    r("NotGreaterLess;", '\u{2279}', None),
    r("NotGreaterSlantEqual;", '\u{2A7E}', Some('\u{338}')),
    r("NotGreaterTilde;", '\u{2275}', None),
    r("NotHumpDownHump;", '\u{224E}', Some('\u{338}')),
    r("NotHumpEqual;", '\u{224F}', Some('\u{338}')),
    r("NotLeftTriangle;", '\u{22EA}', None),
    r("NotLeftTriangleBar;", '\u{29CF}', Some('\u{338}')),
    r("NotLeftTriangleEqual;", '\u{22EC}', None),
    r("NotLess;", '\u{226E}', None),
    r("NotLessEqual;", '\u{2270}', None),
    r("NotLessGreater;", '\u{2278}', None),
    r("NotLessLess;", '\u{226A}', Some('\u{338}')),
    r("NotLessSlantEqual;", '\u{2A7D}', Some('\u{338}')),
    r("NotLessTilde;", '\u{2274}', None),
    r("NotNestedGreaterGreater;", '\u{2AA2}', Some('\u{338}')),
    r("NotNestedLessLess;", '\u{2AA1}', Some('\u{338}')),
    r("NotPrecedes;", '\u{2280}', None),
    r("NotPrecedesEqual;", '\u{2AAF}', Some('\u{338}')),
    r("NotPrecedesSlantEqual;", '\u{22E0}', None),
    r("NotReverseElement;", '\u{220C}', None),
    r("NotRightTriangle;", '\u{22EB}', None),
    r("NotRightTriangleBar;", '\u{29D0}', Some('\u{338}')),
    r("NotRightTriangleEqual;", '\u{22ED}', None),
    r("NotSquareSubset;", '\u{228F}', Some('\u{338}')),
    r("NotSquareSubsetEqual;", '\u{22E2}', None),
    r("NotSquareSuperset;", '\u{2290}', Some('\u{338}')),
    r("NotSquareSupersetEqual;", '\u{22E3}', None),
    r("NotSubset;", '\u{2282}', Some('\u{20D2}')),
    r("NotSubsetEqual;", '\u{2288}', None),
    r("NotSucceeds;", '\u{2281}', None),
    r("NotSucceedsEqual;", '\u{2AB0}', Some('\u{338}')),
    r("NotSucceedsSlantEqual;", '\u{22E1}', None),
    r("NotSucceedsTilde;", '\u{227F}', Some('\u{338}')),
    r("NotSuperset;", '\u{2283}', Some('\u{20D2}')),
    r("NotSupersetEqual;", '\u{2289}', None),
    r("NotTilde;", '\u{2241}', None),
    r("NotTildeEqual;", '\u{2244}', None),
    r("NotTildeFullEqual;", '\u{2247}', None),
    r("NotTildeTilde;", '\u{2249}', None),
    r("NotVerticalBar;", '\u{2224}', None),
    r("Nscr;", '\u{1D4A9}', None),
    r("Ntilde", '\u{D1}', None),
    r("Ntilde;", '\u{D1}', None),
    r("Nu;", '\u{39D}', None),
    r("OElig;", '\u{152}', None),
    r("Oacute", '\u{D3}', None),
    r("Oacute;", '\u{D3}', None),
    r("Ocirc", '\u{D4}', None),
    r("Ocirc;", '\u{D4}', None),
    r("Ocy;", '\u{41E}', None),
    r("Odblac;", '\u{150}', None),
    r("Ofr;", '\u{1D512}', None),
    r("Ograve", '\u{D2}', None),
    r("Ograve;", '\u{D2}', None),
    r("Omacr;", '\u{14C}', None),
    r("Omega;", '\u{3A9}', None),
    r("Omicron;", '\u{39F}', None),
    r("Oopf;", '\u{1D546}', None),
    r("OpenCurlyDoubleQuote;", '\u{201C}', None),
    r("OpenCurlyQuote;", '\u{2018}', None),
    r("Or;", '\u{2A54}', None),
    r("Oscr;", '\u{1D4AA}', None),
    r("Oslash", '\u{D8}', None),
    r("Oslash;", '\u{D8}', None),
    r("Otilde", '\u{D5}', None),
    r("Otilde;", '\u{D5}', None),
    r("Otimes;", '\u{2A37}', None),
    r("Ouml", '\u{D6}', None),
    r("Ouml;", '\u{D6}', None),
    r("OverBar;", '\u{203E}', None),
    r("OverBrace;", '\u{23DE}', None),
    r("OverBracket;", '\u{23B4}', None),
    r("OverParenthesis;", '\u{23DC}', None),
    r("PartialD;", '\u{2202}', None),
    r("Pcy;", '\u{41F}', None),
    r("Pfr;", '\u{1D513}', None),
    r("Phi;", '\u{3A6}', None),
    r("Pi;", '\u{3A0}', None),
    r("PlusMinus;", '\u{B1}', None),
    r("Poincareplane;", '\u{210C}', None),
    r("Popf;", '\u{2119}', None),
    r("Pr;", '\u{2ABB}', None),
    r("Precedes;", '\u{227A}', None),
    r("PrecedesEqual;", '\u{2AAF}', None),
    r("PrecedesSlantEqual;", '\u{227C}', None),
    r("PrecedesTilde;", '\u{227E}', None),
    r("Prime;", '\u{2033}', None),
    r("Product;", '\u{220F}', None),
    r("Proportion;", '\u{2237}', None),
    r("Proportional;", '\u{221D}', None),
    r("Pscr;", '\u{1D4AB}', None),
    r("Psi;", '\u{3A8}', None),
    r("QUOT", '\u{22}', None),
    r("QUOT;", '\u{22}', None),
    r("Qfr;", '\u{1D514}', None),
    r("Qopf;", '\u{211A}', None),
    r("Qscr;", '\u{1D4AC}', None),
    r("RBarr;", '\u{2910}', None),
    r("REG", '\u{AE}', None),
    r("REG;", '\u{AE}', None),
    r("Racute;", '\u{154}', None),
    r("Rang;", '\u{27EB}', None),
    r("Rarr;", '\u{21A0}', None),
    r("Rarrtl;", '\u{2916}', None),
    r("Rcaron;", '\u{158}', None),
    r("Rcedil;", '\u{156}', None),
    r("Rcy;", '\u{420}', None),
    r("Re;", '\u{211C}', None),
    r("ReverseElement;", '\u{220B}', None),
    r("ReverseEquilibrium;", '\u{21CB}', None),
    r("ReverseUpEquilibrium;", '\u{296F}', None),
    r("Rfr;", '\u{211C}', None),
    r("Rho;", '\u{3A1}', None),
    r("RightAngleBracket;", '\u{27E9}', None),
    r("RightArrow;", '\u{2192}', None),
    r("RightArrowBar;", '\u{21E5}', None),
    r("RightArrowLeftArrow;", '\u{21C4}', None),
    r("RightCeiling;", '\u{2309}', None),
    r("RightDoubleBracket;", '\u{27E7}', None),
    r("RightDownTeeVector;", '\u{295D}', None),
    r("RightDownVector;", '\u{21C2}', None),
    r("RightDownVectorBar;", '\u{2955}', None),
    r("RightFloor;", '\u{230B}', None),
    r("RightTee;", '\u{22A2}', None),
    r("RightTeeArrow;", '\u{21A6}', None),
    r("RightTeeVector;", '\u{295B}', None),
    r("RightTriangle;", '\u{22B3}', None),
    r("RightTriangleBar;", '\u{29D0}', None),
    r("RightTriangleEqual;", '\u{22B5}', None),
    r("RightUpDownVector;", '\u{294F}', None),
    r("RightUpTeeVector;", '\u{295C}', None),
    r("RightUpVector;", '\u{21BE}', None),
    r("RightUpVectorBar;", '\u{2954}', None),
    r("RightVector;", '\u{21C0}', None),
    r("RightVectorBar;", '\u{2953}', None),
    r("Rightarrow;", '\u{21D2}', None),
    r("Ropf;", '\u{211D}', None),
    r("RoundImplies;", '\u{2970}', None),
    r("Rrightarrow;", '\u{21DB}', None),
    r("Rscr;", '\u{211B}', None),
    r("Rsh;", '\u{21B1}', None),
    r("RuleDelayed;", '\u{29F4}', None),
    r("SHCHcy;", '\u{429}', None),
    r("SHcy;", '\u{428}', None),
    r("SOFTcy;", '\u{42C}', None),
    r("Sacute;", '\u{15A}', None),
    r("Sc;", '\u{2ABC}', None),
    r("Scaron;", '\u{160}', None),
    r("Scedil;", '\u{15E}', None),
    r("Scirc;", '\u{15C}', None),
    r("Scy;", '\u{421}', None),
    r("Sfr;", '\u{1D516}', None),
    r("ShortDownArrow;", '\u{2193}', None),
    r("ShortLeftArrow;", '\u{2190}', None),
    r("ShortRightArrow;", '\u{2192}', None),
    r("ShortUpArrow;", '\u{2191}', None),
    r("Sigma;", '\u{3A3}', None),
    r("SmallCircle;", '\u{2218}', None),
    r("Sopf;", '\u{1D54A}', None),
    r("Sqrt;", '\u{221A}', None),
    r("Square;", '\u{25A1}', None),
    r("SquareIntersection;", '\u{2293}', None),
    r("SquareSubset;", '\u{228F}', None),
    r("SquareSubsetEqual;", '\u{2291}', None),
    r("SquareSuperset;", '\u{2290}', None),
    r("SquareSupersetEqual;", '\u{2292}', None),
    r("SquareUnion;", '\u{2294}', None),
    r("Sscr;", '\u{1D4AE}', None),
    r("Star;", '\u{22C6}', None),
    r("Sub;", '\u{22D0}', None),
    r("Subset;", '\u{22D0}', None),
    r("SubsetEqual;", '\u{2286}', None),
    r("Succeeds;", '\u{227B}', None),
    r("SucceedsEqual;", '\u{2AB0}', None),
    r("SucceedsSlantEqual;", '\u{227D}', None),
    r("SucceedsTilde;", '\u{227F}', None),
    r("SuchThat;", '\u{220B}', None),
    r("Sum;", '\u{2211}', None),
    r("Sup;", '\u{22D1}', None),
    r("Superset;", '\u{2283}', None),
    r("SupersetEqual;", '\u{2287}', None),
    r("Supset;", '\u{22D1}', None),
    r("THORN", '\u{DE}', None),
    r("THORN;", '\u{DE}', None),
    r("TRADE;", '\u{2122}', None),
    r("TSHcy;", '\u{40B}', None),
    r("TScy;", '\u{426}', None),
    r("Tab;", '\u{9}', None),
    r("Tau;", '\u{3A4}', None),
    r("Tcaron;", '\u{164}', None),
    r("Tcedil;", '\u{162}', None),
    r("Tcy;", '\u{422}', None),
    r("Tfr;", '\u{1D517}', None),
    r("Therefore;", '\u{2234}', None),
    r("Theta;", '\u{398}', None),
    r("ThickSpace;", '\u{205F}', Some('\u{200A}')),
    r("ThinSpace;", '\u{2009}', None),
    r("Tilde;", '\u{223C}', None),
    r("TildeEqual;", '\u{2243}', None),
    r("TildeFullEqual;", '\u{2245}', None),
    r("TildeTilde;", '\u{2248}', None),
    r("Topf;", '\u{1D54B}', None),
    r("TripleDot;", '\u{20DB}', None),
    r("Tscr;", '\u{1D4AF}', None),
    r("Tstrok;", '\u{166}', None),
    r("Uacute", '\u{DA}', None),
    r("Uacute;", '\u{DA}', None),
    r("Uarr;", '\u{219F}', None),
    r("Uarrocir;", '\u{2949}', None),
    r("Ubrcy;", '\u{40E}', None),
    r("Ubreve;", '\u{16C}', None),
    r("Ucirc", '\u{DB}', None),
    r("Ucirc;", '\u{DB}', None),
    r("Ucy;", '\u{423}', None),
    r("Udblac;", '\u{170}', None),
    r("Ufr;", '\u{1D518}', None),
    r("Ugrave", '\u{D9}', None),
    r("Ugrave;", '\u{D9}', None),
    r("Umacr;", '\u{16A}', None),
    r("UnderBar;", '\u{5F}', None),
    r("UnderBrace;", '\u{23DF}', None),
    r("UnderBracket;", '\u{23B5}', None),
    r("UnderParenthesis;", '\u{23DD}', None),
    r("Union;", '\u{22C3}', None),
    r("UnionPlus;", '\u{228E}', None),
    r("Uogon;", '\u{172}', None),
    r("Uopf;", '\u{1D54C}', None),
    r("UpArrow;", '\u{2191}', None),
    r("UpArrowBar;", '\u{2912}', None),
    r("UpArrowDownArrow;", '\u{21C5}', None),
    r("UpDownArrow;", '\u{2195}', None),
    r("UpEquilibrium;", '\u{296E}', None),
    r("UpTee;", '\u{22A5}', None),
    r("UpTeeArrow;", '\u{21A5}', None),
    r("Uparrow;", '\u{21D1}', None),
    r("Updownarrow;", '\u{21D5}', None),
    r("UpperLeftArrow;", '\u{2196}', None),
    r("UpperRightArrow;", '\u{2197}', None),
    r("Upsi;", '\u{3D2}', None),
    r("Upsilon;", '\u{3A5}', None),
    r("Uring;", '\u{16E}', None),
    r("Uscr;", '\u{1D4B0}', None),
    r("Utilde;", '\u{168}', None),
    r("Uuml", '\u{DC}', None),
    r("Uuml;", '\u{DC}', None),
    r("VDash;", '\u{22AB}', None),
    r("Vbar;", '\u{2AEB}', None),
    r("Vcy;", '\u{412}', None),
    r("Vdash;", '\u{22A9}', None),
    r("Vdashl;", '\u{2AE6}', None),
    r("Vee;", '\u{22C1}', None),
    r("Verbar;", '\u{2016}', None),
    r("Vert;", '\u{2016}', None),
    r("VerticalBar;", '\u{2223}', None),
    r("VerticalLine;", '\u{7C}', None),
    r("VerticalSeparator;", '\u{2758}', None),
    r("VerticalTilde;", '\u{2240}', None),
    r("VeryThinSpace;", '\u{200A}', None),
    r("Vfr;", '\u{1D519}', None),
    r("Vopf;", '\u{1D54D}', None),
    r("Vscr;", '\u{1D4B1}', None),
    r("Vvdash;", '\u{22AA}', None),
    r("Wcirc;", '\u{174}', None),
    r("Wedge;", '\u{22C0}', None),
    r("Wfr;", '\u{1D51A}', None),
    r("Wopf;", '\u{1D54E}', None),
    r("Wscr;", '\u{1D4B2}', None),
    r("Xfr;", '\u{1D51B}', None),
    r("Xi;", '\u{39E}', None),
    r("Xopf;", '\u{1D54F}', None),
    r("Xscr;", '\u{1D4B3}', None),
    r("YAcy;", '\u{42F}', None),
    r("YIcy;", '\u{407}', None),
    r("YUcy;", '\u{42E}', None),
    r("Yacute", '\u{DD}', None),
    r("Yacute;", '\u{DD}', None),
    r("Ycirc;", '\u{176}', None),
    r("Ycy;", '\u{42B}', None),
    r("Yfr;", '\u{1D51C}', None),
    r("Yopf;", '\u{1D550}', None),
    r("Yscr;", '\u{1D4B4}', None),
    r("Yuml;", '\u{178}', None),
    r("ZHcy;", '\u{416}', None),
    r("Zacute;", '\u{179}', None),
    r("Zcaron;", '\u{17D}', None),
    r("Zcy;", '\u{417}', None),
    r("Zdot;", '\u{17B}', None),
    r("ZeroWidthSpace;", '\u{200B}', None),
    r("Zeta;", '\u{396}', None),
    r("Zfr;", '\u{2128}', None),
    r("Zopf;", '\u{2124}', None),
    r("Zscr;", '\u{1D4B5}', None),
    r("aacute", '\u{E1}', None),
    r("aacute;", '\u{E1}', None),
    r("abreve;", '\u{103}', None),
    r("ac;", '\u{223E}', None),
    r("acE;", '\u{223E}', Some('\u{333}')),
    r("acd;", '\u{223F}', None),
    r("acirc", '\u{E2}', None),
    r("acirc;", '\u{E2}', None),
    r("acute", '\u{B4}', None),
    r("acute;", '\u{B4}', None),
    r("acy;", '\u{430}', None),
    r("aelig", '\u{E6}', None),
    r("aelig;", '\u{E6}', None),
    r("af;", '\u{2061}', None),
    r("afr;", '\u{1D51E}', None),
    r("agrave", '\u{E0}', None),
    r("agrave;", '\u{E0}', None),
    r("alefsym;", '\u{2135}', None),
    r("aleph;", '\u{2135}', None),
    r("alpha;", '\u{3B1}', None),
    r("amacr;", '\u{101}', None),
    r("amalg;", '\u{2A3F}', None),
    r("amp", '\u{26}', None),
    r("amp;", '\u{26}', None),
    r("and;", '\u{2227}', None),
    r("andand;", '\u{2A55}', None),
    r("andd;", '\u{2A5C}', None),
    r("andslope;", '\u{2A58}', None),
    r("andv;", '\u{2A5A}', None),
    r("ang;", '\u{2220}', None),
    r("ange;", '\u{29A4}', None),
    r("angle;", '\u{2220}', None),
    r("angmsd;", '\u{2221}', None),
    r("angmsdaa;", '\u{29A8}', None),
    r("angmsdab;", '\u{29A9}', None),
    r("angmsdac;", '\u{29AA}', None),
    r("angmsdad;", '\u{29AB}', None),
    r("angmsdae;", '\u{29AC}', None),
    r("angmsdaf;", '\u{29AD}', None),
    r("angmsdag;", '\u{29AE}', None),
    r("angmsdah;", '\u{29AF}', None),
    r("angrt;", '\u{221F}', None),
    r("angrtvb;", '\u{22BE}', None),
    r("angrtvbd;", '\u{299D}', None),
    r("angsph;", '\u{2222}', None),
    r("angst;", '\u{C5}', None),
    r("angzarr;", '\u{237C}', None),
    r("aogon;", '\u{105}', None),
    r("aopf;", '\u{1D552}', None),
    r("ap;", '\u{2248}', None),
    r("apE;", '\u{2A70}', None),
    r("apacir;", '\u{2A6F}', None),
    r("ape;", '\u{224A}', None),
    r("apid;", '\u{224B}', None),
    r("apos;", '\u{27}', None),
    r("approx;", '\u{2248}', None),
    r("approxeq;", '\u{224A}', None),
    r("aring", '\u{E5}', None),
    r("aring;", '\u{E5}', None),
    r("ascr;", '\u{1D4B6}', None),
    r("ast;", '\u{2A}', None),
    r("asymp;", '\u{2248}', None),
    r("asympeq;", '\u{224D}', None),
    r("atilde", '\u{E3}', None),
    r("atilde;", '\u{E3}', None),
    r("auml", '\u{E4}', None),
    r("auml;", '\u{E4}', None),
    r("awconint;", '\u{2233}', None),
    r("awint;", '\u{2A11}', None),
    r("bNot;", '\u{2AED}', None),
    r("backcong;", '\u{224C}', None),
    r("backepsilon;", '\u{3F6}', None),
    r("backprime;", '\u{2035}', None),
    r("backsim;", '\u{223D}', None),
    r("backsimeq;", '\u{22CD}', None),
    r("barvee;", '\u{22BD}', None),
    r("barwed;", '\u{2305}', None),
    r("barwedge;", '\u{2305}', None),
    r("bbrk;", '\u{23B5}', None),
    r("bbrktbrk;", '\u{23B6}', None),
    r("bcong;", '\u{224C}', None),
    r("bcy;", '\u{431}', None),
    r("bdquo;", '\u{201E}', None),
    r("becaus;", '\u{2235}', None),
    r("because;", '\u{2235}', None),
    r("bemptyv;", '\u{29B0}', None),
    r("bepsi;", '\u{3F6}', None),
    r("bernou;", '\u{212C}', None),
    r("beta;", '\u{3B2}', None),
    r("beth;", '\u{2136}', None),
    r("between;", '\u{226C}', None),
    r("bfr;", '\u{1D51F}', None),
    r("bigcap;", '\u{22C2}', None),
    r("bigcirc;", '\u{25EF}', None),
    r("bigcup;", '\u{22C3}', None),
    r("bigodot;", '\u{2A00}', None),
    r("bigoplus;", '\u{2A01}', None),
    r("bigotimes;", '\u{2A02}', None),
    r("bigsqcup;", '\u{2A06}', None),
    r("bigstar;", '\u{2605}', None),
    r("bigtriangledown;", '\u{25BD}', None),
    r("bigtriangleup;", '\u{25B3}', None),
    r("biguplus;", '\u{2A04}', None),
    r("bigvee;", '\u{22C1}', None),
    r("bigwedge;", '\u{22C0}', None),
    r("bkarow;", '\u{290D}', None),
    r("blacklozenge;", '\u{29EB}', None),
    r("blacksquare;", '\u{25AA}', None),
    r("blacktriangle;", '\u{25B4}', None),
    r("blacktriangledown;", '\u{25BE}', None),
    r("blacktriangleleft;", '\u{25C2}', None),
    r("blacktriangleright;", '\u{25B8}', None),
    r("blank;", '\u{2423}', None),
    r("blk12;", '\u{2592}', None),
    r("blk14;", '\u{2591}', None),
    r("blk34;", '\u{2593}', None),
    r("block;", '\u{2588}', None),
    r("bne;", '\u{3D}', Some('\u{20E5}')),
    r("bnequiv;", '\u{2261}', Some('\u{20E5}')),
    r("bnot;", '\u{2310}', None),
    r("bopf;", '\u{1D553}', None),
    r("bot;", '\u{22A5}', None),
    r("bottom;", '\u{22A5}', None),
    r("bowtie;", '\u{22C8}', None),
    r("boxDL;", '\u{2557}', None),
    r("boxDR;", '\u{2554}', None),
    r("boxDl;", '\u{2556}', None),
    r("boxDr;", '\u{2553}', None),
    r("boxH;", '\u{2550}', None),
    r("boxHD;", '\u{2566}', None),
    r("boxHU;", '\u{2569}', None),
    r("boxHd;", '\u{2564}', None),
    r("boxHu;", '\u{2567}', None),
    r("boxUL;", '\u{255D}', None),
    r("boxUR;", '\u{255A}', None),
    r("boxUl;", '\u{255C}', None),
    r("boxUr;", '\u{2559}', None),
    r("boxV;", '\u{2551}', None),
    r("boxVH;", '\u{256C}', None),
    r("boxVL;", '\u{2563}', None),
    r("boxVR;", '\u{2560}', None),
    r("boxVh;", '\u{256B}', None),
    r("boxVl;", '\u{2562}', None),
    r("boxVr;", '\u{255F}', None),
    r("boxbox;", '\u{29C9}', None),
    r("boxdL;", '\u{2555}', None),
    r("boxdR;", '\u{2552}', None),
    r("boxdl;", '\u{2510}', None),
    r("boxdr;", '\u{250C}', None),
    r("boxh;", '\u{2500}', None),
    r("boxhD;", '\u{2565}', None),
    r("boxhU;", '\u{2568}', None),
    r("boxhd;", '\u{252C}', None),
    r("boxhu;", '\u{2534}', None),
    r("boxminus;", '\u{229F}', None),
    r("boxplus;", '\u{229E}', None),
    r("boxtimes;", '\u{22A0}', None),
    r("boxuL;", '\u{255B}', None),
    r("boxuR;", '\u{2558}', None),
    r("boxul;", '\u{2518}', None),
    r("boxur;", '\u{2514}', None),
    r("boxv;", '\u{2502}', None),
    r("boxvH;", '\u{256A}', None),
    r("boxvL;", '\u{2561}', None),
    r("boxvR;", '\u{255E}', None),
    r("boxvh;", '\u{253C}', None),
    r("boxvl;", '\u{2524}', None),
    r("boxvr;", '\u{251C}', None),
    r("bprime;", '\u{2035}', None),
    r("breve;", '\u{2D8}', None),
    r("brvbar", '\u{A6}', None),
    r("brvbar;", '\u{A6}', None),
    r("bscr;", '\u{1D4B7}', None),
    r("bsemi;", '\u{204F}', None),
    r("bsim;", '\u{223D}', None),
    r("bsime;", '\u{22CD}', None),
    r("bsol;", '\u{5C}', None),
    r("bsolb;", '\u{29C5}', None),
    r("bsolhsub;", '\u{27C8}', None),
    r("bull;", '\u{2022}', None),
    r("bullet;", '\u{2022}', None),
    r("bump;", '\u{224E}', None),
    r("bumpE;", '\u{2AAE}', None),
    r("bumpe;", '\u{224F}', None),
    r("bumpeq;", '\u{224F}', None),
    r("cacute;", '\u{107}', None),
    r("cap;", '\u{2229}', None),
    r("capand;", '\u{2A44}', None),
    r("capbrcup;", '\u{2A49}', None),
    r("capcap;", '\u{2A4B}', None),
    r("capcup;", '\u{2A47}', None),
    r("capdot;", '\u{2A40}', None),
    r("caps;", '\u{2229}', Some('\u{FE00}')),
    r("caret;", '\u{2041}', None),
    r("caron;", '\u{2C7}', None),
    r("ccaps;", '\u{2A4D}', None),
    r("ccaron;", '\u{10D}', None),
    r("ccedil", '\u{E7}', None),
    r("ccedil;", '\u{E7}', None),
    r("ccirc;", '\u{109}', None),
    r("ccups;", '\u{2A4C}', None),
    r("ccupssm;", '\u{2A50}', None),
    r("cdot;", '\u{10B}', None),
    r("cedil", '\u{B8}', None),
    r("cedil;", '\u{B8}', None),
    r("cemptyv;", '\u{29B2}', None),
    r("cent", '\u{A2}', None),
    r("cent;", '\u{A2}', None),
    r("centerdot;", '\u{B7}', None),
    r("cfr;", '\u{1D520}', None),
    r("chcy;", '\u{447}', None),
    r("check;", '\u{2713}', None),
    r("checkmark;", '\u{2713}', None),
    r("chi;", '\u{3C7}', None),
    r("cir;", '\u{25CB}', None),
    r("cirE;", '\u{29C3}', None),
    r("circ;", '\u{2C6}', None),
    r("circeq;", '\u{2257}', None),
    r("circlearrowleft;", '\u{21BA}', None),
    r("circlearrowright;", '\u{21BB}', None),
    r("circledR;", '\u{AE}', None),
    r("circledS;", '\u{24C8}', None),
    r("circledast;", '\u{229B}', None),
    r("circledcirc;", '\u{229A}', None),
    r("circleddash;", '\u{229D}', None),
    r("cire;", '\u{2257}', None),
    r("cirfnint;", '\u{2A10}', None),
    r("cirmid;", '\u{2AEF}', None),
    r("cirscir;", '\u{29C2}', None),
    r("clubs;", '\u{2663}', None),
    r("clubsuit;", '\u{2663}', None),
    r("colon;", '\u{3A}', None),
    r("colone;", '\u{2254}', None),
    r("coloneq;", '\u{2254}', None),
    r("comma;", '\u{2C}', None),
    r("commat;", '\u{40}', None),
    r("comp;", '\u{2201}', None),
    r("compfn;", '\u{2218}', None),
    r("complement;", '\u{2201}', None),
    r("complexes;", '\u{2102}', None),
    r("cong;", '\u{2245}', None),
    r("congdot;", '\u{2A6D}', None),
    r("conint;", '\u{222E}', None),
    r("copf;", '\u{1D554}', None),
    r("coprod;", '\u{2210}', None),
    r("copy", '\u{A9}', None),
    r("copy;", '\u{A9}', None),
    r("copysr;", '\u{2117}', None),
    r("crarr;", '\u{21B5}', None),
    r("cross;", '\u{2717}', None),
    r("cscr;", '\u{1D4B8}', None),
    r("csub;", '\u{2ACF}', None),
    r("csube;", '\u{2AD1}', None),
    r("csup;", '\u{2AD0}', None),
    r("csupe;", '\u{2AD2}', None),
    r("ctdot;", '\u{22EF}', None),
    r("cudarrl;", '\u{2938}', None),
    r("cudarrr;", '\u{2935}', None),
    r("cuepr;", '\u{22DE}', None),
    r("cuesc;", '\u{22DF}', None),
    r("cularr;", '\u{21B6}', None),
    r("cularrp;", '\u{293D}', None),
    r("cup;", '\u{222A}', None),
    r("cupbrcap;", '\u{2A48}', None),
    r("cupcap;", '\u{2A46}', None),
    r("cupcup;", '\u{2A4A}', None),
    r("cupdot;", '\u{228D}', None),
    r("cupor;", '\u{2A45}', None),
    r("cups;", '\u{222A}', Some('\u{FE00}')),
    r("curarr;", '\u{21B7}', None),
    r("curarrm;", '\u{293C}', None),
    r("curlyeqprec;", '\u{22DE}', None),
    r("curlyeqsucc;", '\u{22DF}', None),
    r("curlyvee;", '\u{22CE}', None),
    r("curlywedge;", '\u{22CF}', None),
    r("curren", '\u{A4}', None),
    r("curren;", '\u{A4}', None),
    r("curvearrowleft;", '\u{21B6}', None),
    r("curvearrowright;", '\u{21B7}', None),
    r("cuvee;", '\u{22CE}', None),
    r("cuwed;", '\u{22CF}', None),
    r("cwconint;", '\u{2232}', None),
    r("cwint;", '\u{2231}', None),
    r("cylcty;", '\u{232D}', None),
    r("dArr;", '\u{21D3}', None),
    r("dHar;", '\u{2965}', None),
    r("dagger;", '\u{2020}', None),
    r("daleth;", '\u{2138}', None),
    r("darr;", '\u{2193}', None),
    r("dash;", '\u{2010}', None),
    r("dashv;", '\u{22A3}', None),
    r("dbkarow;", '\u{290F}', None),
    r("dblac;", '\u{2DD}', None),
    r("dcaron;", '\u{10F}', None),
    r("dcy;", '\u{434}', None),
    r("dd;", '\u{2146}', None),
    r("ddagger;", '\u{2021}', None),
    r("ddarr;", '\u{21CA}', None),
    r("ddotseq;", '\u{2A77}', None),
    r("deg", '\u{B0}', None),
    r("deg;", '\u{B0}', None),
    r("delta;", '\u{3B4}', None),
    r("demptyv;", '\u{29B1}', None),
    r("dfisht;", '\u{297F}', None),
    r("dfr;", '\u{1D521}', None),
    r("dharl;", '\u{21C3}', None),
    r("dharr;", '\u{21C2}', None),
    r("diam;", '\u{22C4}', None),
    r("diamond;", '\u{22C4}', None),
    r("diamondsuit;", '\u{2666}', None),
    r("diams;", '\u{2666}', None),
    r("die;", '\u{A8}', None),
    r("digamma;", '\u{3DD}', None),
    r("disin;", '\u{22F2}', None),
    r("div;", '\u{F7}', None),
    r("divide", '\u{F7}', None),
    r("divide;", '\u{F7}', None),
    r("divideontimes;", '\u{22C7}', None),
    r("divonx;", '\u{22C7}', None),
    r("djcy;", '\u{452}', None),
    r("dlcorn;", '\u{231E}', None),
    r("dlcrop;", '\u{230D}', None),
    r("dollar;", '\u{24}', None),
    r("dopf;", '\u{1D555}', None),
    r("dot;", '\u{2D9}', None),
    r("doteq;", '\u{2250}', None),
    r("doteqdot;", '\u{2251}', None),
    r("dotminus;", '\u{2238}', None),
    r("dotplus;", '\u{2214}', None),
    r("dotsquare;", '\u{22A1}', None),
    r("doublebarwedge;", '\u{2306}', None),
    r("downarrow;", '\u{2193}', None),
    r("downdownarrows;", '\u{21CA}', None),
    r("downharpoonleft;", '\u{21C3}', None),
    r("downharpoonright;", '\u{21C2}', None),
    r("drbkarow;", '\u{2910}', None),
    r("drcorn;", '\u{231F}', None),
    r("drcrop;", '\u{230C}', None),
    r("dscr;", '\u{1D4B9}', None),
    r("dscy;", '\u{455}', None),
    r("dsol;", '\u{29F6}', None),
    r("dstrok;", '\u{111}', None),
    r("dtdot;", '\u{22F1}', None),
    r("dtri;", '\u{25BF}', None),
    r("dtrif;", '\u{25BE}', None),
    r("duarr;", '\u{21F5}', None),
    r("duhar;", '\u{296F}', None),
    r("dwangle;", '\u{29A6}', None),
    r("dzcy;", '\u{45F}', None),
    r("dzigrarr;", '\u{27FF}', None),
    r("eDDot;", '\u{2A77}', None),
    r("eDot;", '\u{2251}', None),
    r("eacute", '\u{E9}', None),
    r("eacute;", '\u{E9}', None),
    r("easter;", '\u{2A6E}', None),
    r("ecaron;", '\u{11B}', None),
    r("ecir;", '\u{2256}', None),
    r("ecirc", '\u{EA}', None),
    r("ecirc;", '\u{EA}', None),
    r("ecolon;", '\u{2255}', None),
    r("ecy;", '\u{44D}', None),
    r("edot;", '\u{117}', None),
    r("ee;", '\u{2147}', None),
    r("efDot;", '\u{2252}', None),
    r("efr;", '\u{1D522}', None),
    r("eg;", '\u{2A9A}', None),
    r("egrave", '\u{E8}', None),
    r("egrave;", '\u{E8}', None),
    r("egs;", '\u{2A96}', None),
    r("egsdot;", '\u{2A98}', None),
    r("el;", '\u{2A99}', None),
    r("elinters;", '\u{23E7}', None),
    r("ell;", '\u{2113}', None),
    r("els;", '\u{2A95}', None),
    r("elsdot;", '\u{2A97}', None),
    r("emacr;", '\u{113}', None),
    r("empty;", '\u{2205}', None),
    r("emptyset;", '\u{2205}', None),
    r("emptyv;", '\u{2205}', None),
    r("emsp13;", '\u{2004}', None),
    r("emsp14;", '\u{2005}', None),
    r("emsp;", '\u{2003}', None),
    r("eng;", '\u{14B}', None),
    r("ensp;", '\u{2002}', None),
    r("eogon;", '\u{119}', None),
    r("eopf;", '\u{1D556}', None),
    r("epar;", '\u{22D5}', None),
    r("eparsl;", '\u{29E3}', None),
    r("eplus;", '\u{2A71}', None),
    r("epsi;", '\u{3B5}', None),
    r("epsilon;", '\u{3B5}', None),
    r("epsiv;", '\u{3F5}', None),
    r("eqcirc;", '\u{2256}', None),
    r("eqcolon;", '\u{2255}', None),
    r("eqsim;", '\u{2242}', None),
    r("eqslantgtr;", '\u{2A96}', None),
    r("eqslantless;", '\u{2A95}', None),
    r("equals;", '\u{3D}', None),
    r("equest;", '\u{225F}', None),
    r("equiv;", '\u{2261}', None),
    r("equivDD;", '\u{2A78}', None),
    r("eqvparsl;", '\u{29E5}', None),
    r("erDot;", '\u{2253}', None),
    r("erarr;", '\u{2971}', None),
    r("escr;", '\u{212F}', None),
    r("esdot;", '\u{2250}', None),
    r("esim;", '\u{2242}', None),
    r("eta;", '\u{3B7}', None),
    r("eth", '\u{F0}', None),
    r("eth;", '\u{F0}', None),
    r("euml", '\u{EB}', None),
    r("euml;", '\u{EB}', None),
    r("euro;", '\u{20AC}', None),
    r("excl;", '\u{21}', None),
    r("exist;", '\u{2203}', None),
    r("expectation;", '\u{2130}', None),
    r("exponentiale;", '\u{2147}', None),
    r("fallingdotseq;", '\u{2252}', None),
    r("fcy;", '\u{444}', None),
    r("female;", '\u{2640}', None),
    r("ffilig;", '\u{FB03}', None),
    r("fflig;", '\u{FB00}', None),
    r("ffllig;", '\u{FB04}', None),
    r("ffr;", '\u{1D523}', None),
    r("filig;", '\u{FB01}', None),
    r("fjlig;", '\u{66}', Some('\u{6A}')),
    r("flat;", '\u{266D}', None),
    r("fllig;", '\u{FB02}', None),
    r("fltns;", '\u{25B1}', None),
    r("fnof;", '\u{192}', None),
    r("fopf;", '\u{1D557}', None),
    r("forall;", '\u{2200}', None),
    r("fork;", '\u{22D4}', None),
    r("forkv;", '\u{2AD9}', None),
    r("fpartint;", '\u{2A0D}', None),
    r("frac12", '\u{BD}', None),
    r("frac12;", '\u{BD}', None),
    r("frac13;", '\u{2153}', None),
    r("frac14", '\u{BC}', None),
    r("frac14;", '\u{BC}', None),
    r("frac15;", '\u{2155}', None),
    r("frac16;", '\u{2159}', None),
    r("frac18;", '\u{215B}', None),
    r("frac23;", '\u{2154}', None),
    r("frac25;", '\u{2156}', None),
    r("frac34", '\u{BE}', None),
    r("frac34;", '\u{BE}', None),
    r("frac35;", '\u{2157}', None),
    r("frac38;", '\u{215C}', None),
    r("frac45;", '\u{2158}', None),
    r("frac56;", '\u{215A}', None),
    r("frac58;", '\u{215D}', None),
    r("frac78;", '\u{215E}', None),
    r("frasl;", '\u{2044}', None),
    r("frown;", '\u{2322}', None),
    r("fscr;", '\u{1D4BB}', None),
    r("gE;", '\u{2267}', None),
    r("gEl;", '\u{2A8C}', None),
    r("gacute;", '\u{1F5}', None),
    r("gamma;", '\u{3B3}', None),
    r("gammad;", '\u{3DD}', None),
    r("gap;", '\u{2A86}', None),
    r("gbreve;", '\u{11F}', None),
    r("gcirc;", '\u{11D}', None),
    r("gcy;", '\u{433}', None),
    r("gdot;", '\u{121}', None),
    r("ge;", '\u{2265}', None),
    r("gel;", '\u{22DB}', None),
    r("geq;", '\u{2265}', None),
    r("geqq;", '\u{2267}', None),
    r("geqslant;", '\u{2A7E}', None),
    r("ges;", '\u{2A7E}', None),
    r("gescc;", '\u{2AA9}', None),
    r("gesdot;", '\u{2A80}', None),
    r("gesdoto;", '\u{2A82}', None),
    r("gesdotol;", '\u{2A84}', None),
    r("gesl;", '\u{22DB}', Some('\u{FE00}')),
    r("gesles;", '\u{2A94}', None),
    r("gfr;", '\u{1D524}', None),
    r("gg;", '\u{226B}', None),
    r("ggg;", '\u{22D9}', None),
    r("gimel;", '\u{2137}', None),
    r("gjcy;", '\u{453}', None),
    r("gl;", '\u{2277}', None),
    r("glE;", '\u{2A92}', None),
    r("gla;", '\u{2AA5}', None),
    r("glj;", '\u{2AA4}', None),
    r("gnE;", '\u{2269}', None),
    r("gnap;", '\u{2A8A}', None),
    r("gnapprox;", '\u{2A8A}', None),
    r("gne;", '\u{2A88}', None),
    r("gneq;", '\u{2A88}', None),
    r("gneqq;", '\u{2269}', None),
    r("gnsim;", '\u{22E7}', None),
    r("gopf;", '\u{1D558}', None),
    r("grave;", '\u{60}', None),
    r("gscr;", '\u{210A}', None),
    r("gsim;", '\u{2273}', None),
    r("gsime;", '\u{2A8E}', None),
    r("gsiml;", '\u{2A90}', None),
    r("gt", '\u{3E}', None),
    r("gt;", '\u{3E}', None),
    r("gtcc;", '\u{2AA7}', None),
    r("gtcir;", '\u{2A7A}', None),
    r("gtdot;", '\u{22D7}', None),
    r("gtlPar;", '\u{2995}', None),
    r("gtquest;", '\u{2A7C}', None),
    r("gtrapprox;", '\u{2A86}', None),
    r("gtrarr;", '\u{2978}', None),
    r("gtrdot;", '\u{22D7}', None),
    r("gtreqless;", '\u{22DB}', None),
    r("gtreqqless;", '\u{2A8C}', None),
    r("gtrless;", '\u{2277}', None),
    r("gtrsim;", '\u{2273}', None),
    r("gvertneqq;", '\u{2269}', Some('\u{FE00}')),
    r("gvnE;", '\u{2269}', Some('\u{FE00}')),
    r("hArr;", '\u{21D4}', None),
    r("hairsp;", '\u{200A}', None),
    r("half;", '\u{BD}', None),
    r("hamilt;", '\u{210B}', None),
    r("hardcy;", '\u{44A}', None),
    r("harr;", '\u{2194}', None),
    r("harrcir;", '\u{2948}', None),
    r("harrw;", '\u{21AD}', None),
    r("hbar;", '\u{210F}', None),
    r("hcirc;", '\u{125}', None),
    r("hearts;", '\u{2665}', None),
    r("heartsuit;", '\u{2665}', None),
    r("hellip;", '\u{2026}', None),
    r("hercon;", '\u{22B9}', None),
    r("hfr;", '\u{1D525}', None),
    r("hksearow;", '\u{2925}', None),
    r("hkswarow;", '\u{2926}', None),
    r("hoarr;", '\u{21FF}', None),
    r("homtht;", '\u{223B}', None),
    r("hookleftarrow;", '\u{21A9}', None),
    r("hookrightarrow;", '\u{21AA}', None),
    r("hopf;", '\u{1D559}', None),
    r("horbar;", '\u{2015}', None),
    r("hscr;", '\u{1D4BD}', None),
    r("hslash;", '\u{210F}', None),
    r("hstrok;", '\u{127}', None),
    r("hybull;", '\u{2043}', None),
    r("hyphen;", '\u{2010}', None),
    r("iacute", '\u{ED}', None),
    r("iacute;", '\u{ED}', None),
    r("ic;", '\u{2063}', None),
    r("icirc", '\u{EE}', None),
    r("icirc;", '\u{EE}', None),
    r("icy;", '\u{438}', None),
    r("iecy;", '\u{435}', None),
    r("iexcl", '\u{A1}', None),
    r("iexcl;", '\u{A1}', None),
    r("iff;", '\u{21D4}', None),
    r("ifr;", '\u{1D526}', None),
    r("igrave", '\u{EC}', None),
    r("igrave;", '\u{EC}', None),
    r("ii;", '\u{2148}', None),
    r("iiiint;", '\u{2A0C}', None),
    r("iiint;", '\u{222D}', None),
    r("iinfin;", '\u{29DC}', None),
    r("iiota;", '\u{2129}', None),
    r("ijlig;", '\u{133}', None),
    r("imacr;", '\u{12B}', None),
    r("image;", '\u{2111}', None),
    r("imagline;", '\u{2110}', None),
    r("imagpart;", '\u{2111}', None),
    r("imath;", '\u{131}', None),
    r("imof;", '\u{22B7}', None),
    r("imped;", '\u{1B5}', None),
    r("in;", '\u{2208}', None),
    r("incare;", '\u{2105}', None),
    r("infin;", '\u{221E}', None),
    r("infintie;", '\u{29DD}', None),
    r("inodot;", '\u{131}', None),
    r("int;", '\u{222B}', None),
    r("intcal;", '\u{22BA}', None),
    r("integers;", '\u{2124}', None),
    r("intercal;", '\u{22BA}', None),
    r("intlarhk;", '\u{2A17}', None),
    r("intprod;", '\u{2A3C}', None),
    r("iocy;", '\u{451}', None),
    r("iogon;", '\u{12F}', None),
    r("iopf;", '\u{1D55A}', None),
    r("iota;", '\u{3B9}', None),
    r("iprod;", '\u{2A3C}', None),
    r("iquest", '\u{BF}', None),
    r("iquest;", '\u{BF}', None),
    r("iscr;", '\u{1D4BE}', None),
    r("isin;", '\u{2208}', None),
    r("isinE;", '\u{22F9}', None),
    r("isindot;", '\u{22F5}', None),
    r("isins;", '\u{22F4}', None),
    r("isinsv;", '\u{22F3}', None),
    r("isinv;", '\u{2208}', None),
    r("it;", '\u{2062}', None),
    r("itilde;", '\u{129}', None),
    r("iukcy;", '\u{456}', None),
    r("iuml", '\u{EF}', None),
    r("iuml;", '\u{EF}', None),
    r("jcirc;", '\u{135}', None),
    r("jcy;", '\u{439}', None),
    r("jfr;", '\u{1D527}', None),
    r("jmath;", '\u{237}', None),
    r("jopf;", '\u{1D55B}', None),
    r("jscr;", '\u{1D4BF}', None),
    r("jsercy;", '\u{458}', None),
    r("jukcy;", '\u{454}', None),
    r("kappa;", '\u{3BA}', None),
    r("kappav;", '\u{3F0}', None),
    r("kcedil;", '\u{137}', None),
    r("kcy;", '\u{43A}', None),
    r("kfr;", '\u{1D528}', None),
    r("kgreen;", '\u{138}', None),
    r("khcy;", '\u{445}', None),
    r("kjcy;", '\u{45C}', None),
    r("kopf;", '\u{1D55C}', None),
    r("kscr;", '\u{1D4C0}', None),
    r("lAarr;", '\u{21DA}', None),
    r("lArr;", '\u{21D0}', None),
    r("lAtail;", '\u{291B}', None),
    r("lBarr;", '\u{290E}', None),
    r("lE;", '\u{2266}', None),
    r("lEg;", '\u{2A8B}', None),
    r("lHar;", '\u{2962}', None),
    r("lacute;", '\u{13A}', None),
    r("laemptyv;", '\u{29B4}', None),
    r("lagran;", '\u{2112}', None),
    r("lambda;", '\u{3BB}', None),
    r("lang;", '\u{27E8}', None),
    r("langd;", '\u{2991}', None),
    r("langle;", '\u{27E8}', None),
    r("lap;", '\u{2A85}', None),
    r("laquo", '\u{AB}', None),
    r("laquo;", '\u{AB}', None),
    r("larr;", '\u{2190}', None),
    r("larrb;", '\u{21E4}', None),
    r("larrbfs;", '\u{291F}', None),
    r("larrfs;", '\u{291D}', None),
    r("larrhk;", '\u{21A9}', None),
    r("larrlp;", '\u{21AB}', None),
    r("larrpl;", '\u{2939}', None),
    r("larrsim;", '\u{2973}', None),
    r("larrtl;", '\u{21A2}', None),
    r("lat;", '\u{2AAB}', None),
    r("latail;", '\u{2919}', None),
    r("late;", '\u{2AAD}', None),
    r("lates;", '\u{2AAD}', Some('\u{FE00}')),
    r("lbarr;", '\u{290C}', None),
    r("lbbrk;", '\u{2772}', None),
    r("lbrace;", '\u{7B}', None),
    r("lbrack;", '\u{5B}', None),
    r("lbrke;", '\u{298B}', None),
    r("lbrksld;", '\u{298F}', None),
    r("lbrkslu;", '\u{298D}', None),
    r("lcaron;", '\u{13E}', None),
    r("lcedil;", '\u{13C}', None),
    r("lceil;", '\u{2308}', None),
    r("lcub;", '\u{7B}', None),
    r("lcy;", '\u{43B}', None),
    r("ldca;", '\u{2936}', None),
    r("ldquo;", '\u{201C}', None),
    r("ldquor;", '\u{201E}', None),
    r("ldrdhar;", '\u{2967}', None),
    r("ldrushar;", '\u{294B}', None),
    r("ldsh;", '\u{21B2}', None),
    r("le;", '\u{2264}', None),
    r("leftarrow;", '\u{2190}', None),
    r("leftarrowtail;", '\u{21A2}', None),
    r("leftharpoondown;", '\u{21BD}', None),
    r("leftharpoonup;", '\u{21BC}', None),
    r("leftleftarrows;", '\u{21C7}', None),
    r("leftrightarrow;", '\u{2194}', None),
    r("leftrightarrows;", '\u{21C6}', None),
    r("leftrightharpoons;", '\u{21CB}', None),
    r("leftrightsquigarrow;", '\u{21AD}', None),
    r("leftthreetimes;", '\u{22CB}', None),
    r("leg;", '\u{22DA}', None),
    r("leq;", '\u{2264}', None),
    r("leqq;", '\u{2266}', None),
    r("leqslant;", '\u{2A7D}', None),
    r("les;", '\u{2A7D}', None),
    r("lescc;", '\u{2AA8}', None),
    r("lesdot;", '\u{2A7F}', None),
    r("lesdoto;", '\u{2A81}', None),
    r("lesdotor;", '\u{2A83}', None),
    r("lesg;", '\u{22DA}', Some('\u{FE00}')),
    r("lesges;", '\u{2A93}', None),
    r("lessapprox;", '\u{2A85}', None),
    r("lessdot;", '\u{22D6}', None),
    r("lesseqgtr;", '\u{22DA}', None),
    r("lesseqqgtr;", '\u{2A8B}', None),
    r("lessgtr;", '\u{2276}', None),
    r("lesssim;", '\u{2272}', None),
    r("lfisht;", '\u{297C}', None),
    r("lfloor;", '\u{230A}', None),
    r("lfr;", '\u{1D529}', None),
    r("lg;", '\u{2276}', None),
    r("lgE;", '\u{2A91}', None),
    r("lhard;", '\u{21BD}', None),
    r("lharu;", '\u{21BC}', None),
    r("lharul;", '\u{296A}', None),
    r("lhblk;", '\u{2584}', None),
    r("ljcy;", '\u{459}', None),
    r("ll;", '\u{226A}', None),
    r("llarr;", '\u{21C7}', None),
    r("llcorner;", '\u{231E}', None),
    r("llhard;", '\u{296B}', None),
    r("lltri;", '\u{25FA}', None),
    r("lmidot;", '\u{140}', None),
    r("lmoust;", '\u{23B0}', None),
    r("lmoustache;", '\u{23B0}', None),
    r("lnE;", '\u{2268}', None),
    r("lnap;", '\u{2A89}', None),
    r("lnapprox;", '\u{2A89}', None),
    r("lne;", '\u{2A87}', None),
    r("lneq;", '\u{2A87}', None),
    r("lneqq;", '\u{2268}', None),
    r("lnsim;", '\u{22E6}', None),
    r("loang;", '\u{27EC}', None),
    r("loarr;", '\u{21FD}', None),
    r("lobrk;", '\u{27E6}', None),
    r("longleftarrow;", '\u{27F5}', None),
    r("longleftrightarrow;", '\u{27F7}', None),
    r("longmapsto;", '\u{27FC}', None),
    r("longrightarrow;", '\u{27F6}', None),
    r("looparrowleft;", '\u{21AB}', None),
    r("looparrowright;", '\u{21AC}', None),
    r("lopar;", '\u{2985}', None),
    r("lopf;", '\u{1D55D}', None),
    r("loplus;", '\u{2A2D}', None),
    r("lotimes;", '\u{2A34}', None),
    r("lowast;", '\u{2217}', None),
    r("lowbar;", '\u{5F}', None),
    r("loz;", '\u{25CA}', None),
    r("lozenge;", '\u{25CA}', None),
    r("lozf;", '\u{29EB}', None),
    r("lpar;", '\u{28}', None),
    r("lparlt;", '\u{2993}', None),
    r("lrarr;", '\u{21C6}', None),
    r("lrcorner;", '\u{231F}', None),
    r("lrhar;", '\u{21CB}', None),
    r("lrhard;", '\u{296D}', None),
    r("lrm;", '\u{200E}', None),
    r("lrtri;", '\u{22BF}', None),
    r("lsaquo;", '\u{2039}', None),
    r("lscr;", '\u{1D4C1}', None),
    r("lsh;", '\u{21B0}', None),
    r("lsim;", '\u{2272}', None),
    r("lsime;", '\u{2A8D}', None),
    r("lsimg;", '\u{2A8F}', None),
    r("lsqb;", '\u{5B}', None),
    r("lsquo;", '\u{2018}', None),
    r("lsquor;", '\u{201A}', None),
    r("lstrok;", '\u{142}', None),
    r("lt", '\u{3C}', None),
    r("lt;", '\u{3C}', None),
    r("ltcc;", '\u{2AA6}', None),
    r("ltcir;", '\u{2A79}', None),
    r("ltdot;", '\u{22D6}', None),
    r("lthree;", '\u{22CB}', None),
    r("ltimes;", '\u{22C9}', None),
    r("ltlarr;", '\u{2976}', None),
    r("ltquest;", '\u{2A7B}', None),
    r("ltrPar;", '\u{2996}', None),
    r("ltri;", '\u{25C3}', None),
    r("ltrie;", '\u{22B4}', None),
    r("ltrif;", '\u{25C2}', None),
    r("lurdshar;", '\u{294A}', None),
    r("luruhar;", '\u{2966}', None),
    r("lvertneqq;", '\u{2268}', Some('\u{FE00}')),
    r("lvnE;", '\u{2268}', Some('\u{FE00}')),
    r("mDDot;", '\u{223A}', None),
    r("macr", '\u{AF}', None),
    r("macr;", '\u{AF}', None),
    r("male;", '\u{2642}', None),
    r("malt;", '\u{2720}', None),
    r("maltese;", '\u{2720}', None),
    r("map;", '\u{21A6}', None),
    r("mapsto;", '\u{21A6}', None),
    r("mapstodown;", '\u{21A7}', None),
    r("mapstoleft;", '\u{21A4}', None),
    r("mapstoup;", '\u{21A5}', None),
    r("marker;", '\u{25AE}', None),
    r("mcomma;", '\u{2A29}', None),
    r("mcy;", '\u{43C}', None),
    r("mdash;", '\u{2014}', None),
    r("measuredangle;", '\u{2221}', None),
    r("mfr;", '\u{1D52A}', None),
    r("mho;", '\u{2127}', None),
    r("micro", '\u{B5}', None),
    r("micro;", '\u{B5}', None),
    r("mid;", '\u{2223}', None),
    r("midast;", '\u{2A}', None),
    r("midcir;", '\u{2AF0}', None),
    r("middot", '\u{B7}', None),
    r("middot;", '\u{B7}', None),
    r("minus;", '\u{2212}', None),
    r("minusb;", '\u{229F}', None),
    r("minusd;", '\u{2238}', None),
    r("minusdu;", '\u{2A2A}', None),
    r("mlcp;", '\u{2ADB}', None),
    r("mldr;", '\u{2026}', None),
    r("mnplus;", '\u{2213}', None),
    r("models;", '\u{22A7}', None),
    r("mopf;", '\u{1D55E}', None),
    r("mp;", '\u{2213}', None),
    r("mscr;", '\u{1D4C2}', None),
    r("mstpos;", '\u{223E}', None),
    r("mu;", '\u{3BC}', None),
    r("multimap;", '\u{22B8}', None),
    r("mumap;", '\u{22B8}', None),
    r("nGg;", '\u{22D9}', Some('\u{338}')),
    r("nGt;", '\u{226B}', Some('\u{20D2}')),
    r("nGtv;", '\u{226B}', Some('\u{338}')),
    r("nLeftarrow;", '\u{21CD}', None),
    r("nLeftrightarrow;", '\u{21CE}', None),
    r("nLl;", '\u{22D8}', Some('\u{338}')),
    r("nLt;", '\u{226A}', Some('\u{20D2}')),
    r("nLtv;", '\u{226A}', Some('\u{338}')),
    r("nRightarrow;", '\u{21CF}', None),
    r("nVDash;", '\u{22AF}', None),
    r("nVdash;", '\u{22AE}', None),
    r("nabla;", '\u{2207}', None),
    r("nacute;", '\u{144}', None),
    r("nang;", '\u{2220}', Some('\u{20D2}')),
    r("nap;", '\u{2249}', None),
    r("napE;", '\u{2A70}', Some('\u{338}')),
    r("napid;", '\u{224B}', Some('\u{338}')),
    r("napos;", '\u{149}', None),
    r("napprox;", '\u{2249}', None),
    r("natur;", '\u{266E}', None),
    r("natural;", '\u{266E}', None),
    r("naturals;", '\u{2115}', None),
    r("nbsp", '\u{A0}', None),
    r("nbsp;", '\u{A0}', None),
    r("nbump;", '\u{224E}', Some('\u{338}')),
    r("nbumpe;", '\u{224F}', Some('\u{338}')),
    r("ncap;", '\u{2A43}', None),
    r("ncaron;", '\u{148}', None),
    r("ncedil;", '\u{146}', None),
    r("ncong;", '\u{2247}', None),
    r("ncongdot;", '\u{2A6D}', Some('\u{338}')),
    r("ncup;", '\u{2A42}', None),
    r("ncy;", '\u{43D}', None),
    r("ndash;", '\u{2013}', None),
    r("ne;", '\u{2260}', None),
    r("neArr;", '\u{21D7}', None),
    r("nearhk;", '\u{2924}', None),
    r("nearr;", '\u{2197}', None),
    r("nearrow;", '\u{2197}', None),
    r("nedot;", '\u{2250}', Some('\u{338}')),
    r("nequiv;", '\u{2262}', None),
    r("nesear;", '\u{2928}', None),
    r("nesim;", '\u{2242}', Some('\u{338}')),
    r("nexist;", '\u{2204}', None),
    r("nexists;", '\u{2204}', None),
    r("nfr;", '\u{1D52B}', None),
    r("ngE;", '\u{2267}', Some('\u{338}')),
    r("nge;", '\u{2271}', None),
    r("ngeq;", '\u{2271}', None),
    r("ngeqq;", '\u{2267}', Some('\u{338}')),
    r("ngeqslant;", '\u{2A7E}', Some('\u{338}')),
    r("nges;", '\u{2A7E}', Some('\u{338}')),
    r("ngsim;", '\u{2275}', None),
    r("ngt;", '\u{226F}', None),
    r("ngtr;", '\u{226F}', None),
    r("nhArr;", '\u{21CE}', None),
    r("nharr;", '\u{21AE}', None),
    r("nhpar;", '\u{2AF2}', None),
    r("ni;", '\u{220B}', None),
    r("nis;", '\u{22FC}', None),
    r("nisd;", '\u{22FA}', None),
    r("niv;", '\u{220B}', None),
    r("njcy;", '\u{45A}', None),
    r("nlArr;", '\u{21CD}', None),
    r("nlE;", '\u{2266}', Some('\u{338}')),
    r("nlarr;", '\u{219A}', None),
    r("nldr;", '\u{2025}', None),
    r("nle;", '\u{2270}', None),
    r("nleftarrow;", '\u{219A}', None),
    r("nleftrightarrow;", '\u{21AE}', None),
    r("nleq;", '\u{2270}', None),
    r("nleqq;", '\u{2266}', Some('\u{338}')),
    r("nleqslant;", '\u{2A7D}', Some('\u{338}')),
    r("nles;", '\u{2A7D}', Some('\u{338}')),
    r("nless;", '\u{226E}', None),
    r("nlsim;", '\u{2274}', None),
    r("nlt;", '\u{226E}', None),
    r("nltri;", '\u{22EA}', None),
    r("nltrie;", '\u{22EC}', None),
    r("nmid;", '\u{2224}', None),
    r("nopf;", '\u{1D55F}', None),
    r("not", '\u{AC}', None),
    r("not;", '\u{AC}', None),
    r("notin;", '\u{2209}', None),
    r("notinE;", '\u{22F9}', Some('\u{338}')),
    r("notindot;", '\u{22F5}', Some('\u{338}')),
    r("notinva;", '\u{2209}', None),
    r("notinvb;", '\u{22F7}', None),
    r("notinvc;", '\u{22F6}', None),
    r("notni;", '\u{220C}', None),
    r("notniva;", '\u{220C}', None),
    r("notnivb;", '\u{22FE}', None),
    r("notnivc;", '\u{22FD}', None),
    r("npar;", '\u{2226}', None),
    r("nparallel;", '\u{2226}', None),
    r("nparsl;", '\u{2AFD}', Some('\u{20E5}')),
    r("npart;", '\u{2202}', Some('\u{338}')),
    r("npolint;", '\u{2A14}', None),
    r("npr;", '\u{2280}', None),
    r("nprcue;", '\u{22E0}', None),
    r("npre;", '\u{2AAF}', Some('\u{338}')),
    r("nprec;", '\u{2280}', None),
    r("npreceq;", '\u{2AAF}', Some('\u{338}')),
    r("nrArr;", '\u{21CF}', None),
    r("nrarr;", '\u{219B}', None),
    r("nrarrc;", '\u{2933}', Some('\u{338}')),
    r("nrarrw;", '\u{219D}', Some('\u{338}')),
    r("nrightarrow;", '\u{219B}', None),
    r("nrtri;", '\u{22EB}', None),
    r("nrtrie;", '\u{22ED}', None),
    r("nsc;", '\u{2281}', None),
    r("nsccue;", '\u{22E1}', None),
    r("nsce;", '\u{2AB0}', Some('\u{338}')),
    r("nscr;", '\u{1D4C3}', None),
    r("nshortmid;", '\u{2224}', None),
    r("nshortparallel;", '\u{2226}', None),
    r("nsim;", '\u{2241}', None),
    r("nsime;", '\u{2244}', None),
    r("nsimeq;", '\u{2244}', None),
    r("nsmid;", '\u{2224}', None),
    r("nspar;", '\u{2226}', None),
    r("nsqsube;", '\u{22E2}', None),
    r("nsqsupe;", '\u{22E3}', None),
    r("nsub;", '\u{2284}', None),
    r("nsubE;", '\u{2AC5}', Some('\u{338}')),
    r("nsube;", '\u{2288}', None),
    r("nsubset;", '\u{2282}', Some('\u{20D2}')),
    r("nsubseteq;", '\u{2288}', None),
    r("nsubseteqq;", '\u{2AC5}', Some('\u{338}')),
    r("nsucc;", '\u{2281}', None),
    r("nsucceq;", '\u{2AB0}', Some('\u{338}')),
    r("nsup;", '\u{2285}', None),
    r("nsupE;", '\u{2AC6}', Some('\u{338}')),
    r("nsupe;", '\u{2289}', None),
    r("nsupset;", '\u{2283}', Some('\u{20D2}')),
    r("nsupseteq;", '\u{2289}', None),
    r("nsupseteqq;", '\u{2AC6}', Some('\u{338}')),
    r("ntgl;", '\u{2279}', None),
    r("ntilde", '\u{F1}', None),
    r("ntilde;", '\u{F1}', None),
    r("ntlg;", '\u{2278}', None),
    r("ntriangleleft;", '\u{22EA}', None),
    r("ntrianglelefteq;", '\u{22EC}', None),
    r("ntriangleright;", '\u{22EB}', None),
    r("ntrianglerighteq;", '\u{22ED}', None),
    r("nu;", '\u{3BD}', None),
    r("num;", '\u{23}', None),
    r("numero;", '\u{2116}', None),
    r("numsp;", '\u{2007}', None),
    r("nvDash;", '\u{22AD}', None),
    r("nvHarr;", '\u{2904}', None),
    r("nvap;", '\u{224D}', Some('\u{20D2}')),
    r("nvdash;", '\u{22AC}', None),
    r("nvge;", '\u{2265}', Some('\u{20D2}')),
    r("nvgt;", '\u{3E}', Some('\u{20D2}')),
    r("nvinfin;", '\u{29DE}', None),
    r("nvlArr;", '\u{2902}', None),
    r("nvle;", '\u{2264}', Some('\u{20D2}')),
    r("nvlt;", '\u{3C}', Some('\u{20D2}')),
    r("nvltrie;", '\u{22B4}', Some('\u{20D2}')),
    r("nvrArr;", '\u{2903}', None),
    r("nvrtrie;", '\u{22B5}', Some('\u{20D2}')),
    r("nvsim;", '\u{223C}', Some('\u{20D2}')),
    r("nwArr;", '\u{21D6}', None),
    r("nwarhk;", '\u{2923}', None),
    r("nwarr;", '\u{2196}', None),
    r("nwarrow;", '\u{2196}', None),
    r("nwnear;", '\u{2927}', None),
    r("oS;", '\u{24C8}', None),
    r("oacute", '\u{F3}', None),
    r("oacute;", '\u{F3}', None),
    r("oast;", '\u{229B}', None),
    r("ocir;", '\u{229A}', None),
    r("ocirc", '\u{F4}', None),
    r("ocirc;", '\u{F4}', None),
    r("ocy;", '\u{43E}', None),
    r("odash;", '\u{229D}', None),
    r("odblac;", '\u{151}', None),
    r("odiv;", '\u{2A38}', None),
    r("odot;", '\u{2299}', None),
    r("odsold;", '\u{29BC}', None),
    r("oelig;", '\u{153}', None),
    r("ofcir;", '\u{29BF}', None),
    r("ofr;", '\u{1D52C}', None),
    r("ogon;", '\u{2DB}', None),
    r("ograve", '\u{F2}', None),
    r("ograve;", '\u{F2}', None),
    r("ogt;", '\u{29C1}', None),
    r("ohbar;", '\u{29B5}', None),
    r("ohm;", '\u{3A9}', None),
    r("oint;", '\u{222E}', None),
    r("olarr;", '\u{21BA}', None),
    r("olcir;", '\u{29BE}', None),
    r("olcross;", '\u{29BB}', None),
    r("oline;", '\u{203E}', None),
    r("olt;", '\u{29C0}', None),
    r("omacr;", '\u{14D}', None),
    r("omega;", '\u{3C9}', None),
    r("omicron;", '\u{3BF}', None),
    r("omid;", '\u{29B6}', None),
    r("ominus;", '\u{2296}', None),
    r("oopf;", '\u{1D560}', None),
    r("opar;", '\u{29B7}', None),
    r("operp;", '\u{29B9}', None),
    r("oplus;", '\u{2295}', None),
    r("or;", '\u{2228}', None),
    r("orarr;", '\u{21BB}', None),
    r("ord;", '\u{2A5D}', None),
    r("order;", '\u{2134}', None),
    r("orderof;", '\u{2134}', None),
    r("ordf", '\u{AA}', None),
    r("ordf;", '\u{AA}', None),
    r("ordm", '\u{BA}', None),
    r("ordm;", '\u{BA}', None),
    r("origof;", '\u{22B6}', None),
    r("oror;", '\u{2A56}', None),
    r("orslope;", '\u{2A57}', None),
    r("orv;", '\u{2A5B}', None),
    r("oscr;", '\u{2134}', None),
    r("oslash", '\u{F8}', None),
    r("oslash;", '\u{F8}', None),
    r("osol;", '\u{2298}', None),
    r("otilde", '\u{F5}', None),
    r("otilde;", '\u{F5}', None),
    r("otimes;", '\u{2297}', None),
    r("otimesas;", '\u{2A36}', None),
    r("ouml", '\u{F6}', None),
    r("ouml;", '\u{F6}', None),
    r("ovbar;", '\u{233D}', None),
    r("par;", '\u{2225}', None),
    r("para", '\u{B6}', None),
    r("para;", '\u{B6}', None),
    r("parallel;", '\u{2225}', None),
    r("parsim;", '\u{2AF3}', None),
    r("parsl;", '\u{2AFD}', None),
    r("part;", '\u{2202}', None),
    r("pcy;", '\u{43F}', None),
    r("percnt;", '\u{25}', None),
    r("period;", '\u{2E}', None),
    r("permil;", '\u{2030}', None),
    r("perp;", '\u{22A5}', None),
    r("pertenk;", '\u{2031}', None),
    r("pfr;", '\u{1D52D}', None),
    r("phi;", '\u{3C6}', None),
    r("phiv;", '\u{3D5}', None),
    r("phmmat;", '\u{2133}', None),
    r("phone;", '\u{260E}', None),
    r("pi;", '\u{3C0}', None),
    r("pitchfork;", '\u{22D4}', None),
    r("piv;", '\u{3D6}', None),
    r("planck;", '\u{210F}', None),
    r("planckh;", '\u{210E}', None),
    r("plankv;", '\u{210F}', None),
    r("plus;", '\u{2B}', None),
    r("plusacir;", '\u{2A23}', None),
    r("plusb;", '\u{229E}', None),
    r("pluscir;", '\u{2A22}', None),
    r("plusdo;", '\u{2214}', None),
    r("plusdu;", '\u{2A25}', None),
    r("pluse;", '\u{2A72}', None),
    r("plusmn", '\u{B1}', None),
    r("plusmn;", '\u{B1}', None),
    r("plussim;", '\u{2A26}', None),
    r("plustwo;", '\u{2A27}', None),
    r("pm;", '\u{B1}', None),
    r("pointint;", '\u{2A15}', None),
    r("popf;", '\u{1D561}', None),
    r("pound", '\u{A3}', None),
    r("pound;", '\u{A3}', None),
    r("pr;", '\u{227A}', None),
    r("prE;", '\u{2AB3}', None),
    r("prap;", '\u{2AB7}', None),
    r("prcue;", '\u{227C}', None),
    r("pre;", '\u{2AAF}', None),
    r("prec;", '\u{227A}', None),
    r("precapprox;", '\u{2AB7}', None),
    r("preccurlyeq;", '\u{227C}', None),
    r("preceq;", '\u{2AAF}', None),
    r("precnapprox;", '\u{2AB9}', None),
    r("precneqq;", '\u{2AB5}', None),
    r("precnsim;", '\u{22E8}', None),
    r("precsim;", '\u{227E}', None),
    r("prime;", '\u{2032}', None),
    r("primes;", '\u{2119}', None),
    r("prnE;", '\u{2AB5}', None),
    r("prnap;", '\u{2AB9}', None),
    r("prnsim;", '\u{22E8}', None),
    r("prod;", '\u{220F}', None),
    r("profalar;", '\u{232E}', None),
    r("profline;", '\u{2312}', None),
    r("profsurf;", '\u{2313}', None),
    r("prop;", '\u{221D}', None),
    r("propto;", '\u{221D}', None),
    r("prsim;", '\u{227E}', None),
    r("prurel;", '\u{22B0}', None),
    r("pscr;", '\u{1D4C5}', None),
    r("psi;", '\u{3C8}', None),
    r("puncsp;", '\u{2008}', None),
    r("qfr;", '\u{1D52E}', None),
    r("qint;", '\u{2A0C}', None),
    r("qopf;", '\u{1D562}', None),
    r("qprime;", '\u{2057}', None),
    r("qscr;", '\u{1D4C6}', None),
    r("quaternions;", '\u{210D}', None),
    r("quatint;", '\u{2A16}', None),
    r("quest;", '\u{3F}', None),
    r("questeq;", '\u{225F}', None),
    r("quot", '\u{22}', None),
    r("quot;", '\u{22}', None),
    r("rAarr;", '\u{21DB}', None),
    r("rArr;", '\u{21D2}', None),
    r("rAtail;", '\u{291C}', None),
    r("rBarr;", '\u{290F}', None),
    r("rHar;", '\u{2964}', None),
    r("race;", '\u{223D}', Some('\u{331}')),
    r("racute;", '\u{155}', None),
    r("radic;", '\u{221A}', None),
    r("raemptyv;", '\u{29B3}', None),
    r("rang;", '\u{27E9}', None),
    r("rangd;", '\u{2992}', None),
    r("range;", '\u{29A5}', None),
    r("rangle;", '\u{27E9}', None),
    r("raquo", '\u{BB}', None),
    r("raquo;", '\u{BB}', None),
    r("rarr;", '\u{2192}', None),
    r("rarrap;", '\u{2975}', None),
    r("rarrb;", '\u{21E5}', None),
    r("rarrbfs;", '\u{2920}', None),
    r("rarrc;", '\u{2933}', None),
    r("rarrfs;", '\u{291E}', None),
    r("rarrhk;", '\u{21AA}', None),
    r("rarrlp;", '\u{21AC}', None),
    r("rarrpl;", '\u{2945}', None),
    r("rarrsim;", '\u{2974}', None),
    r("rarrtl;", '\u{21A3}', None),
    r("rarrw;", '\u{219D}', None),
    r("ratail;", '\u{291A}', None),
    r("ratio;", '\u{2236}', None),
    r("rationals;", '\u{211A}', None),
    r("rbarr;", '\u{290D}', None),
    r("rbbrk;", '\u{2773}', None),
    r("rbrace;", '\u{7D}', None),
    r("rbrack;", '\u{5D}', None),
    r("rbrke;", '\u{298C}', None),
    r("rbrksld;", '\u{298E}', None),
    r("rbrkslu;", '\u{2990}', None),
    r("rcaron;", '\u{159}', None),
    r("rcedil;", '\u{157}', None),
    r("rceil;", '\u{2309}', None),
    r("rcub;", '\u{7D}', None),
    r("rcy;", '\u{440}', None),
    r("rdca;", '\u{2937}', None),
    r("rdldhar;", '\u{2969}', None),
    r("rdquo;", '\u{201D}', None),
    r("rdquor;", '\u{201D}', None),
    r("rdsh;", '\u{21B3}', None),
    r("real;", '\u{211C}', None),
    r("realine;", '\u{211B}', None),
    r("realpart;", '\u{211C}', None),
    r("reals;", '\u{211D}', None),
    r("rect;", '\u{25AD}', None),
    r("reg", '\u{AE}', None),
    r("reg;", '\u{AE}', None),
    r("rfisht;", '\u{297D}', None),
    r("rfloor;", '\u{230B}', None),
    r("rfr;", '\u{1D52F}', None),
    r("rhard;", '\u{21C1}', None),
    r("rharu;", '\u{21C0}', None),
    r("rharul;", '\u{296C}', None),
    r("rho;", '\u{3C1}', None),
    r("rhov;", '\u{3F1}', None),
    r("rightarrow;", '\u{2192}', None),
    r("rightarrowtail;", '\u{21A3}', None),
    r("rightharpoondown;", '\u{21C1}', None),
    r("rightharpoonup;", '\u{21C0}', None),
    r("rightleftarrows;", '\u{21C4}', None),
    r("rightleftharpoons;", '\u{21CC}', None),
    r("rightrightarrows;", '\u{21C9}', None),
    r("rightsquigarrow;", '\u{219D}', None),
    r("rightthreetimes;", '\u{22CC}', None),
    r("ring;", '\u{2DA}', None),
    r("risingdotseq;", '\u{2253}', None),
    r("rlarr;", '\u{21C4}', None),
    r("rlhar;", '\u{21CC}', None),
    r("rlm;", '\u{200F}', None),
    r("rmoust;", '\u{23B1}', None),
    r("rmoustache;", '\u{23B1}', None),
    r("rnmid;", '\u{2AEE}', None),
    r("roang;", '\u{27ED}', None),
    r("roarr;", '\u{21FE}', None),
    r("robrk;", '\u{27E7}', None),
    r("ropar;", '\u{2986}', None),
    r("ropf;", '\u{1D563}', None),
    r("roplus;", '\u{2A2E}', None),
    r("rotimes;", '\u{2A35}', None),
    r("rpar;", '\u{29}', None),
    r("rpargt;", '\u{2994}', None),
    r("rppolint;", '\u{2A12}', None),
    r("rrarr;", '\u{21C9}', None),
    r("rsaquo;", '\u{203A}', None),
    r("rscr;", '\u{1D4C7}', None),
    r("rsh;", '\u{21B1}', None),
    r("rsqb;", '\u{5D}', None),
    r("rsquo;", '\u{2019}', None),
    r("rsquor;", '\u{2019}', None),
    r("rthree;", '\u{22CC}', None),
    r("rtimes;", '\u{22CA}', None),
    r("rtri;", '\u{25B9}', None),
    r("rtrie;", '\u{22B5}', None),
    r("rtrif;", '\u{25B8}', None),
    r("rtriltri;", '\u{29CE}', None),
    r("ruluhar;", '\u{2968}', None),
    r("rx;", '\u{211E}', None),
    r("sacute;", '\u{15B}', None),
    r("sbquo;", '\u{201A}', None),
    r("sc;", '\u{227B}', None),
    r("scE;", '\u{2AB4}', None),
    r("scap;", '\u{2AB8}', None),
    r("scaron;", '\u{161}', None),
    r("sccue;", '\u{227D}', None),
    r("sce;", '\u{2AB0}', None),
    r("scedil;", '\u{15F}', None),
    r("scirc;", '\u{15D}', None),
    r("scnE;", '\u{2AB6}', None),
    r("scnap;", '\u{2ABA}', None),
    r("scnsim;", '\u{22E9}', None),
    r("scpolint;", '\u{2A13}', None),
    r("scsim;", '\u{227F}', None),
    r("scy;", '\u{441}', None),
    r("sdot;", '\u{22C5}', None),
    r("sdotb;", '\u{22A1}', None),
    r("sdote;", '\u{2A66}', None),
    r("seArr;", '\u{21D8}', None),
    r("searhk;", '\u{2925}', None),
    r("searr;", '\u{2198}', None),
    r("searrow;", '\u{2198}', None),
    r("sect", '\u{A7}', None),
    r("sect;", '\u{A7}', None),
    r("semi;", '\u{3B}', None),
    r("seswar;", '\u{2929}', None),
    r("setminus;", '\u{2216}', None),
    r("setmn;", '\u{2216}', None),
    r("sext;", '\u{2736}', None),
    r("sfr;", '\u{1D530}', None),
    r("sfrown;", '\u{2322}', None),
    r("sharp;", '\u{266F}', None),
    r("shchcy;", '\u{449}', None),
    r("shcy;", '\u{448}', None),
    r("shortmid;", '\u{2223}', None),
    r("shortparallel;", '\u{2225}', None),
    r("shy", '\u{AD}', None),
    r("shy;", '\u{AD}', None),
    r("sigma;", '\u{3C3}', None),
    r("sigmaf;", '\u{3C2}', None),
    r("sigmav;", '\u{3C2}', None),
    r("sim;", '\u{223C}', None),
    r("simdot;", '\u{2A6A}', None),
    r("sime;", '\u{2243}', None),
    r("simeq;", '\u{2243}', None),
    r("simg;", '\u{2A9E}', None),
    r("simgE;", '\u{2AA0}', None),
    r("siml;", '\u{2A9D}', None),
    r("simlE;", '\u{2A9F}', None),
    r("simne;", '\u{2246}', None),
    r("simplus;", '\u{2A24}', None),
    r("simrarr;", '\u{2972}', None),
    r("slarr;", '\u{2190}', None),
    r("smallsetminus;", '\u{2216}', None),
    r("smashp;", '\u{2A33}', None),
    r("smeparsl;", '\u{29E4}', None),
    r("smid;", '\u{2223}', None),
    r("smile;", '\u{2323}', None),
    r("smt;", '\u{2AAA}', None),
    r("smte;", '\u{2AAC}', None),
    r("smtes;", '\u{2AAC}', Some('\u{FE00}')),
    r("softcy;", '\u{44C}', None),
    r("sol;", '\u{2F}', None),
    r("solb;", '\u{29C4}', None),
    r("solbar;", '\u{233F}', None),
    r("sopf;", '\u{1D564}', None),
    r("spades;", '\u{2660}', None),
    r("spadesuit;", '\u{2660}', None),
    r("spar;", '\u{2225}', None),
    r("sqcap;", '\u{2293}', None),
    r("sqcaps;", '\u{2293}', Some('\u{FE00}')),
    r("sqcup;", '\u{2294}', None),
    r("sqcups;", '\u{2294}', Some('\u{FE00}')),
    r("sqsub;", '\u{228F}', None),
    r("sqsube;", '\u{2291}', None),
    r("sqsubset;", '\u{228F}', None),
    r("sqsubseteq;", '\u{2291}', None),
    r("sqsup;", '\u{2290}', None),
    r("sqsupe;", '\u{2292}', None),
    r("sqsupset;", '\u{2290}', None),
    r("sqsupseteq;", '\u{2292}', None),
    r("squ;", '\u{25A1}', None),
    r("square;", '\u{25A1}', None),
    r("squarf;", '\u{25AA}', None),
    r("squf;", '\u{25AA}', None),
    r("srarr;", '\u{2192}', None),
    r("sscr;", '\u{1D4C8}', None),
    r("ssetmn;", '\u{2216}', None),
    r("ssmile;", '\u{2323}', None),
    r("sstarf;", '\u{22C6}', None),
    r("star;", '\u{2606}', None),
    r("starf;", '\u{2605}', None),
    r("straightepsilon;", '\u{3F5}', None),
    r("straightphi;", '\u{3D5}', None),
    r("strns;", '\u{AF}', None),
    r("sub;", '\u{2282}', None),
    r("subE;", '\u{2AC5}', None),
    r("subdot;", '\u{2ABD}', None),
    r("sube;", '\u{2286}', None),
    r("subedot;", '\u{2AC3}', None),
    r("submult;", '\u{2AC1}', None),
    r("subnE;", '\u{2ACB}', None),
    r("subne;", '\u{228A}', None),
    r("subplus;", '\u{2ABF}', None),
    r("subrarr;", '\u{2979}', None),
    r("subset;", '\u{2282}', None),
    r("subseteq;", '\u{2286}', None),
    r("subseteqq;", '\u{2AC5}', None),
    r("subsetneq;", '\u{228A}', None),
    r("subsetneqq;", '\u{2ACB}', None),
    r("subsim;", '\u{2AC7}', None),
    r("subsub;", '\u{2AD5}', None),
    r("subsup;", '\u{2AD3}', None),
    r("succ;", '\u{227B}', None),
    r("succapprox;", '\u{2AB8}', None),
    r("succcurlyeq;", '\u{227D}', None),
    r("succeq;", '\u{2AB0}', None),
    r("succnapprox;", '\u{2ABA}', None),
    r("succneqq;", '\u{2AB6}', None),
    r("succnsim;", '\u{22E9}', None),
    r("succsim;", '\u{227F}', None),
    r("sum;", '\u{2211}', None),
    r("sung;", '\u{266A}', None),
    r("sup1", '\u{B9}', None),
    r("sup1;", '\u{B9}', None),
    r("sup2", '\u{B2}', None),
    r("sup2;", '\u{B2}', None),
    r("sup3", '\u{B3}', None),
    r("sup3;", '\u{B3}', None),
    r("sup;", '\u{2283}', None),
    r("supE;", '\u{2AC6}', None),
    r("supdot;", '\u{2ABE}', None),
    r("supdsub;", '\u{2AD8}', None),
    r("supe;", '\u{2287}', None),
    r("supedot;", '\u{2AC4}', None),
    r("suphsol;", '\u{27C9}', None),
    r("suphsub;", '\u{2AD7}', None),
    r("suplarr;", '\u{297B}', None),
    r("supmult;", '\u{2AC2}', None),
    r("supnE;", '\u{2ACC}', None),
    r("supne;", '\u{228B}', None),
    r("supplus;", '\u{2AC0}', None),
    r("supset;", '\u{2283}', None),
    r("supseteq;", '\u{2287}', None),
    r("supseteqq;", '\u{2AC6}', None),
    r("supsetneq;", '\u{228B}', None),
    r("supsetneqq;", '\u{2ACC}', None),
    r("supsim;", '\u{2AC8}', None),
    r("supsub;", '\u{2AD4}', None),
    r("supsup;", '\u{2AD6}', None),
    r("swArr;", '\u{21D9}', None),
    r("swarhk;", '\u{2926}', None),
    r("swarr;", '\u{2199}', None),
    r("swarrow;", '\u{2199}', None),
    r("swnwar;", '\u{292A}', None),
    r("szlig", '\u{DF}', None),
    r("szlig;", '\u{DF}', None),
    r("target;", '\u{2316}', None),
    r("tau;", '\u{3C4}', None),
    r("tbrk;", '\u{23B4}', None),
    r("tcaron;", '\u{165}', None),
    r("tcedil;", '\u{163}', None),
    r("tcy;", '\u{442}', None),
    r("tdot;", '\u{20DB}', None),
    r("telrec;", '\u{2315}', None),
    r("tfr;", '\u{1D531}', None),
    r("there4;", '\u{2234}', None),
    r("therefore;", '\u{2234}', None),
    r("theta;", '\u{3B8}', None),
    r("thetasym;", '\u{3D1}', None),
    r("thetav;", '\u{3D1}', None),
    r("thickapprox;", '\u{2248}', None),
    r("thicksim;", '\u{223C}', None),
    r("thinsp;", '\u{2009}', None),
    r("thkap;", '\u{2248}', None),
    r("thksim;", '\u{223C}', None),
    r("thorn", '\u{FE}', None),
    r("thorn;", '\u{FE}', None),
    r("tilde;", '\u{2DC}', None),
    r("times", '\u{D7}', None),
    r("times;", '\u{D7}', None),
    r("timesb;", '\u{22A0}', None),
    r("timesbar;", '\u{2A31}', None),
    r("timesd;", '\u{2A30}', None),
    r("tint;", '\u{222D}', None),
    r("toea;", '\u{2928}', None),
    r("top;", '\u{22A4}', None),
    r("topbot;", '\u{2336}', None),
    r("topcir;", '\u{2AF1}', None),
    r("topf;", '\u{1D565}', None),
    r("topfork;", '\u{2ADA}', None),
    r("tosa;", '\u{2929}', None),
    r("tprime;", '\u{2034}', None),
    r("trade;", '\u{2122}', None),
    r("triangle;", '\u{25B5}', None),
    r("triangledown;", '\u{25BF}', None),
    r("triangleleft;", '\u{25C3}', None),
    r("trianglelefteq;", '\u{22B4}', None),
    r("triangleq;", '\u{225C}', None),
    r("triangleright;", '\u{25B9}', None),
    r("trianglerighteq;", '\u{22B5}', None),
    r("tridot;", '\u{25EC}', None),
    r("trie;", '\u{225C}', None),
    r("triminus;", '\u{2A3A}', None),
    r("triplus;", '\u{2A39}', None),
    r("trisb;", '\u{29CD}', None),
    r("tritime;", '\u{2A3B}', None),
    r("trpezium;", '\u{23E2}', None),
    r("tscr;", '\u{1D4C9}', None),
    r("tscy;", '\u{446}', None),
    r("tshcy;", '\u{45B}', None),
    r("tstrok;", '\u{167}', None),
    r("twixt;", '\u{226C}', None),
    r("twoheadleftarrow;", '\u{219E}', None),
    r("twoheadrightarrow;", '\u{21A0}', None),
    r("uArr;", '\u{21D1}', None),
    r("uHar;", '\u{2963}', None),
    r("uacute", '\u{FA}', None),
    r("uacute;", '\u{FA}', None),
    r("uarr;", '\u{2191}', None),
    r("ubrcy;", '\u{45E}', None),
    r("ubreve;", '\u{16D}', None),
    r("ucirc", '\u{FB}', None),
    r("ucirc;", '\u{FB}', None),
    r("ucy;", '\u{443}', None),
    r("udarr;", '\u{21C5}', None),
    r("udblac;", '\u{171}', None),
    r("udhar;", '\u{296E}', None),
    r("ufisht;", '\u{297E}', None),
    r("ufr;", '\u{1D532}', None),
    r("ugrave", '\u{F9}', None),
    r("ugrave;", '\u{F9}', None),
    r("uharl;", '\u{21BF}', None),
    r("uharr;", '\u{21BE}', None),
    r("uhblk;", '\u{2580}', None),
    r("ulcorn;", '\u{231C}', None),
    r("ulcorner;", '\u{231C}', None),
    r("ulcrop;", '\u{230F}', None),
    r("ultri;", '\u{25F8}', None),
    r("umacr;", '\u{16B}', None),
    r("uml", '\u{A8}', None),
    r("uml;", '\u{A8}', None),
    r("uogon;", '\u{173}', None),
    r("uopf;", '\u{1D566}', None),
    r("uparrow;", '\u{2191}', None),
    r("updownarrow;", '\u{2195}', None),
    r("upharpoonleft;", '\u{21BF}', None),
    r("upharpoonright;", '\u{21BE}', None),
    r("uplus;", '\u{228E}', None),
    r("upsi;", '\u{3C5}', None),
    r("upsih;", '\u{3D2}', None),
    r("upsilon;", '\u{3C5}', None),
    r("upuparrows;", '\u{21C8}', None),
    r("urcorn;", '\u{231D}', None),
    r("urcorner;", '\u{231D}', None),
    r("urcrop;", '\u{230E}', None),
    r("uring;", '\u{16F}', None),
    r("urtri;", '\u{25F9}', None),
    r("uscr;", '\u{1D4CA}', None),
    r("utdot;", '\u{22F0}', None),
    r("utilde;", '\u{169}', None),
    r("utri;", '\u{25B5}', None),
    r("utrif;", '\u{25B4}', None),
    r("uuarr;", '\u{21C8}', None),
    r("uuml", '\u{FC}', None),
    r("uuml;", '\u{FC}', None),
    r("uwangle;", '\u{29A7}', None),
    r("vArr;", '\u{21D5}', None),
    r("vBar;", '\u{2AE8}', None),
    r("vBarv;", '\u{2AE9}', None),
    r("vDash;", '\u{22A8}', None),
    r("vangrt;", '\u{299C}', None),
    r("varepsilon;", '\u{3F5}', None),
    r("varkappa;", '\u{3F0}', None),
    r("varnothing;", '\u{2205}', None),
    r("varphi;", '\u{3D5}', None),
    r("varpi;", '\u{3D6}', None),
    r("varpropto;", '\u{221D}', None),
    r("varr;", '\u{2195}', None),
    r("varrho;", '\u{3F1}', None),
    r("varsigma;", '\u{3C2}', None),
    r("varsubsetneq;", '\u{228A}', Some('\u{FE00}')),
    r("varsubsetneqq;", '\u{2ACB}', Some('\u{FE00}')),
    r("varsupsetneq;", '\u{228B}', Some('\u{FE00}')),
    r("varsupsetneqq;", '\u{2ACC}', Some('\u{FE00}')),
    r("vartheta;", '\u{3D1}', None),
    r("vartriangleleft;", '\u{22B2}', None),
    r("vartriangleright;", '\u{22B3}', None),
    r("vcy;", '\u{432}', None),
    r("vdash;", '\u{22A2}', None),
    r("vee;", '\u{2228}', None),
    r("veebar;", '\u{22BB}', None),
    r("veeeq;", '\u{225A}', None),
    r("vellip;", '\u{22EE}', None),
    r("verbar;", '\u{7C}', None),
    r("vert;", '\u{7C}', None),
    r("vfr;", '\u{1D533}', None),
    r("vltri;", '\u{22B2}', None),
    r("vnsub;", '\u{2282}', Some('\u{20D2}')),
    r("vnsup;", '\u{2283}', Some('\u{20D2}')),
    r("vopf;", '\u{1D567}', None),
    r("vprop;", '\u{221D}', None),
    r("vrtri;", '\u{22B3}', None),
    r("vscr;", '\u{1D4CB}', None),
    r("vsubnE;", '\u{2ACB}', Some('\u{FE00}')),
    r("vsubne;", '\u{228A}', Some('\u{FE00}')),
    r("vsupnE;", '\u{2ACC}', Some('\u{FE00}')),
    r("vsupne;", '\u{228B}', Some('\u{FE00}')),
    r("vzigzag;", '\u{299A}', None),
    r("wcirc;", '\u{175}', None),
    r("wedbar;", '\u{2A5F}', None),
    r("wedge;", '\u{2227}', None),
    r("wedgeq;", '\u{2259}', None),
    r("weierp;", '\u{2118}', None),
    r("wfr;", '\u{1D534}', None),
    r("wopf;", '\u{1D568}', None),
    r("wp;", '\u{2118}', None),
    r("wr;", '\u{2240}', None),
    r("wreath;", '\u{2240}', None),
    r("wscr;", '\u{1D4CC}', None),
    r("xcap;", '\u{22C2}', None),
    r("xcirc;", '\u{25EF}', None),
    r("xcup;", '\u{22C3}', None),
    r("xdtri;", '\u{25BD}', None),
    r("xfr;", '\u{1D535}', None),
    r("xhArr;", '\u{27FA}', None),
    r("xharr;", '\u{27F7}', None),
    r("xi;", '\u{3BE}', None),
    r("xlArr;", '\u{27F8}', None),
    r("xlarr;", '\u{27F5}', None),
    r("xmap;", '\u{27FC}', None),
    r("xnis;", '\u{22FB}', None),
    r("xodot;", '\u{2A00}', None),
    r("xopf;", '\u{1D569}', None),
    r("xoplus;", '\u{2A01}', None),
    r("xotime;", '\u{2A02}', None),
    r("xrArr;", '\u{27F9}', None),
    r("xrarr;", '\u{27F6}', None),
    r("xscr;", '\u{1D4CD}', None),
    r("xsqcup;", '\u{2A06}', None),
    r("xuplus;", '\u{2A04}', None),
    r("xutri;", '\u{25B3}', None),
    r("xvee;", '\u{22C1}', None),
    r("xwedge;", '\u{22C0}', None),
    r("yacute", '\u{FD}', None),
    r("yacute;", '\u{FD}', None),
    r("yacy;", '\u{44F}', None),
    r("ycirc;", '\u{177}', None),
    r("ycy;", '\u{44B}', None),
    r("yen", '\u{A5}', None),
    r("yen;", '\u{A5}', None),
    r("yfr;", '\u{1D536}', None),
    r("yicy;", '\u{457}', None),
    r("yopf;", '\u{1D56A}', None),
    r("yscr;", '\u{1D4CE}', None),
    r("yucy;", '\u{44E}', None),
    r("yuml", '\u{FF}', None),
    r("yuml;", '\u{FF}', None),
    r("zacute;", '\u{17A}', None),
    r("zcaron;", '\u{17E}', None),
    r("zcy;", '\u{437}', None),
    r("zdot;", '\u{17C}', None),
    r("zeetrf;", '\u{2128}', None),
    r("zeta;", '\u{3B6}', None),
    r("zfr;", '\u{1D537}', None),
    r("zhcy;", '\u{436}', None),
    r("zigrarr;", '\u{21DD}', None),
    r("zopf;", '\u{1D56B}', None),
    r("zscr;", '\u{1D4CF}', None),
    r("zwj;", '\u{200D}', None),
    r("zwnj;", '\u{200C}', None),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_strictly_sorted() {
        for window in NAMED_REFERENCES.windows(2) {
            assert!(
                window[0].name.as_bytes() < window[1].name.as_bytes(),
                "entries out of order: {} >= {}",
                window[0].name,
                window[1].name
            );
        }
    }

    #[test]
    fn every_entry_resolves_to_itself() {
        for entry in NAMED_REFERENCES {
            let found = lookup(entry.name.as_bytes()).expect("entry must be findable by its own name");
            assert_eq!(found.first, entry.first);
            assert_eq!(found.second, entry.second);
        }
    }

    #[test]
    fn longest_name_constant_matches_table() {
        let longest = NAMED_REFERENCES
            .iter()
            .map(|entry| entry.name.len())
            .max()
            .expect("table is non-empty");
        assert_eq!(longest, LONGEST_REFERENCE_NAME);
    }

    #[test]
    fn semicolon_and_legacy_forms_coexist() {
        assert_eq!(lookup(b"amp;").map(|entry| entry.first), Some('&'));
        assert_eq!(lookup(b"amp").map(|entry| entry.first), Some('&'));
        assert_eq!(lookup(b"not;").map(|entry| entry.first), Some('\u{AC}'));
        assert_eq!(lookup(b"not").map(|entry| entry.first), Some('\u{AC}'));
        // `lambda;` has no legacy form.
        assert!(lookup(b"lambda;").is_some());
        assert!(lookup(b"lambda").is_none());
    }

    #[test]
    fn two_codepoint_references_expand_fully() {
        let fj = lookup(b"fjlig;").expect("fjlig; is in the table");
        assert_eq!((fj.first, fj.second), ('f', Some('j')));
        let tilde = lookup(b"NotEqualTilde;").expect("NotEqualTilde; is in the table");
        assert_eq!(tilde.first, '\u{2242}');
        assert_eq!(tilde.second, Some('\u{338}'));
    }

    #[test]
    fn unknown_names_do_not_resolve() {
        assert!(lookup(b"notavalidentity;").is_none());
        assert!(lookup(b"").is_none());
        assert!(lookup(b"AMP!").is_none());
    }
}
