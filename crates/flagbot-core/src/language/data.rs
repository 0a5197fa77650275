//! Built-in reference dataset: ISO-3166 alpha-2 country → spoken languages
//! (ISO-639-1, primary first) and ISO-639-1 code → display names.

use super::{Country, Language};

const fn c(code: &'static str, languages: &'static [&'static str]) -> Country {
    Country { code, languages }
}

const fn l(code: &'static str, names: &'static [&'static str]) -> Language {
    Language { code, names }
}

pub static COUNTRIES: &[Country] = &[
    c("AD", &["ca"]),
    c("AE", &["ar"]),
    c("AF", &["ps", "uz", "tk"]),
    c("AG", &["en"]),
    c("AI", &["en"]),
    c("AL", &["sq"]),
    c("AM", &["hy", "ru"]),
    c("AO", &["pt"]),
    c("AQ", &[]),
    c("AR", &["es", "gn"]),
    c("AS", &["en", "sm"]),
    c("AT", &["de"]),
    c("AU", &["en"]),
    c("AW", &["nl", "pa"]),
    c("AX", &["sv"]),
    c("AZ", &["az", "hy"]),
    c("BA", &["bs", "hr", "sr"]),
    c("BB", &["en"]),
    c("BD", &["bn"]),
    c("BE", &["nl", "fr", "de"]),
    c("BF", &["fr", "ff"]),
    c("BG", &["bg"]),
    c("BH", &["ar"]),
    c("BI", &["fr", "rn"]),
    c("BJ", &["fr"]),
    c("BL", &["fr"]),
    c("BM", &["en"]),
    c("BN", &["ms"]),
    c("BO", &["es", "ay", "qu"]),
    c("BQ", &["nl"]),
    c("BR", &["pt"]),
    c("BS", &["en"]),
    c("BT", &["dz"]),
    c("BV", &["no"]),
    c("BW", &["en", "tn"]),
    c("BY", &["be", "ru"]),
    c("BZ", &["en", "es"]),
    c("CA", &["en", "fr"]),
    c("CC", &["en"]),
    c("CD", &["fr", "ln", "kg", "sw", "lu"]),
    c("CF", &["fr", "sg"]),
    c("CG", &["fr", "ln"]),
    c("CH", &["de", "fr", "it", "rm"]),
    c("CI", &["fr"]),
    c("CK", &["en"]),
    c("CL", &["es"]),
    c("CM", &["en", "fr"]),
    c("CN", &["zh"]),
    c("CO", &["es"]),
    c("CR", &["es"]),
    c("CU", &["es"]),
    c("CV", &["pt"]),
    c("CW", &["nl", "pa", "en"]),
    c("CX", &["en"]),
    c("CY", &["el", "tr", "hy"]),
    c("CZ", &["cs", "sk"]),
    c("DE", &["de"]),
    c("DJ", &["fr", "ar"]),
    c("DK", &["da"]),
    c("DM", &["en"]),
    c("DO", &["es"]),
    c("DZ", &["ar"]),
    c("EC", &["es"]),
    c("EE", &["et"]),
    c("EG", &["ar"]),
    c("EH", &["es"]),
    c("ER", &["ti", "ar", "en"]),
    c("ES", &["es", "eu", "ca", "gl", "oc"]),
    c("ET", &["am"]),
    c("FI", &["fi", "sv"]),
    c("FJ", &["en", "fj", "hi", "ur"]),
    c("FK", &["en"]),
    c("FM", &["en"]),
    c("FO", &["fo"]),
    c("FR", &["fr"]),
    c("GA", &["fr"]),
    c("GB", &["en"]),
    c("GD", &["en"]),
    c("GE", &["ka"]),
    c("GF", &["fr"]),
    c("GG", &["en", "fr"]),
    c("GH", &["en"]),
    c("GI", &["en"]),
    c("GL", &["kl"]),
    c("GM", &["en"]),
    c("GN", &["fr", "ff"]),
    c("GP", &["fr"]),
    c("GQ", &["es", "fr"]),
    c("GR", &["el"]),
    c("GS", &["en"]),
    c("GT", &["es"]),
    c("GU", &["en", "ch", "es"]),
    c("GW", &["pt"]),
    c("GY", &["en"]),
    c("HK", &["en", "zh"]),
    c("HM", &["en"]),
    c("HN", &["es"]),
    c("HR", &["hr"]),
    c("HT", &["fr", "ht"]),
    c("HU", &["hu"]),
    c("ID", &["id"]),
    c("IE", &["ga", "en"]),
    c("IL", &["he", "ar"]),
    c("IM", &["en", "gv"]),
    c("IN", &["hi", "en"]),
    c("IO", &["en"]),
    c("IQ", &["ar", "ku"]),
    c("IR", &["fa"]),
    c("IS", &["is"]),
    c("IT", &["it"]),
    c("JE", &["en", "fr"]),
    c("JM", &["en"]),
    c("JO", &["ar"]),
    c("JP", &["ja"]),
    c("KE", &["en", "sw"]),
    c("KG", &["ky", "ru"]),
    c("KH", &["km"]),
    c("KI", &["en"]),
    c("KM", &["ar", "fr"]),
    c("KN", &["en"]),
    c("KP", &["ko"]),
    c("KR", &["ko"]),
    c("KW", &["ar"]),
    c("KY", &["en"]),
    c("KZ", &["kk", "ru"]),
    c("LA", &["lo"]),
    c("LB", &["ar", "fr"]),
    c("LC", &["en"]),
    c("LI", &["de"]),
    c("LK", &["si", "ta"]),
    c("LR", &["en"]),
    c("LS", &["en", "st"]),
    c("LT", &["lt"]),
    c("LU", &["fr", "de", "lb"]),
    c("LV", &["lv"]),
    c("LY", &["ar"]),
    c("MA", &["ar"]),
    c("MC", &["fr"]),
    c("MD", &["ro"]),
    c("ME", &["sr", "bs", "sq", "hr"]),
    c("MF", &["en", "fr", "nl"]),
    c("MG", &["fr", "mg"]),
    c("MH", &["en", "mh"]),
    c("MK", &["mk"]),
    c("ML", &["fr"]),
    c("MM", &["my"]),
    c("MN", &["mn"]),
    c("MO", &["zh", "pt"]),
    c("MP", &["en", "ch"]),
    c("MQ", &["fr"]),
    c("MR", &["ar"]),
    c("MS", &["en"]),
    c("MT", &["mt", "en"]),
    c("MU", &["en", "fr"]),
    c("MV", &["dv"]),
    c("MW", &["en", "ny"]),
    c("MX", &["es"]),
    c("MY", &["ms"]),
    c("MZ", &["pt"]),
    c("NA", &["en", "af"]),
    c("NC", &["fr"]),
    c("NE", &["fr"]),
    c("NF", &["en"]),
    c("NG", &["en", "yo", "ig", "ha"]),
    c("NI", &["es"]),
    c("NL", &["nl"]),
    c("NO", &["no", "nb", "nn"]),
    c("NP", &["ne"]),
    c("NR", &["en", "na"]),
    c("NU", &["en"]),
    c("NZ", &["en", "mi"]),
    c("OM", &["ar"]),
    c("PA", &["es"]),
    c("PE", &["es", "qu", "ay"]),
    c("PF", &["fr"]),
    c("PG", &["en", "ho"]),
    c("PH", &["tl", "en"]),
    c("PK", &["ur", "en"]),
    c("PL", &["pl"]),
    c("PM", &["fr"]),
    c("PN", &["en"]),
    c("PR", &["es", "en"]),
    c("PS", &["ar"]),
    c("PT", &["pt"]),
    c("PW", &["en"]),
    c("PY", &["es", "gn"]),
    c("QA", &["ar"]),
    c("RE", &["fr"]),
    c("RO", &["ro"]),
    c("RS", &["sr"]),
    c("RU", &["ru"]),
    c("RW", &["rw", "en", "fr"]),
    c("SA", &["ar"]),
    c("SB", &["en"]),
    c("SC", &["fr", "en"]),
    c("SD", &["ar", "en"]),
    c("SE", &["sv"]),
    c("SG", &["en", "ms", "ta", "zh"]),
    c("SH", &["en"]),
    c("SI", &["sl"]),
    c("SJ", &["no"]),
    c("SK", &["sk"]),
    c("SL", &["en"]),
    c("SM", &["it"]),
    c("SN", &["fr"]),
    c("SO", &["so", "ar"]),
    c("SR", &["nl"]),
    c("SS", &["en"]),
    c("ST", &["pt"]),
    c("SV", &["es"]),
    c("SX", &["nl", "en"]),
    c("SY", &["ar"]),
    c("SZ", &["en", "ss"]),
    c("TC", &["en"]),
    c("TD", &["fr", "ar"]),
    c("TF", &["fr"]),
    c("TG", &["fr"]),
    c("TH", &["th"]),
    c("TJ", &["tg", "ru"]),
    c("TK", &["en"]),
    c("TL", &["pt"]),
    c("TM", &["tk", "ru"]),
    c("TN", &["ar"]),
    c("TO", &["en", "to"]),
    c("TR", &["tr"]),
    c("TT", &["en"]),
    c("TV", &["en"]),
    c("TW", &["zh"]),
    c("TZ", &["sw", "en"]),
    c("UA", &["uk"]),
    c("UG", &["en", "sw"]),
    c("UM", &["en"]),
    c("US", &["en"]),
    c("UY", &["es"]),
    c("UZ", &["uz", "ru"]),
    c("VA", &["it", "la"]),
    c("VC", &["en"]),
    c("VE", &["es"]),
    c("VG", &["en"]),
    c("VI", &["en"]),
    c("VN", &["vi"]),
    c("VU", &["bi", "en", "fr"]),
    c("WF", &["fr"]),
    c("WS", &["sm", "en"]),
    c("XK", &["sq", "sr"]),
    c("YE", &["ar"]),
    c("YT", &["fr"]),
    c("ZA", &["zu", "xh", "af", "en"]),
    c("ZM", &["en"]),
    c("ZW", &["en", "sn", "nd"]),
];

pub static LANGUAGES: &[Language] = &[
    l("af", &["Afrikaans"]),
    l("am", &["Amharic"]),
    l("ar", &["Arabic"]),
    l("ay", &["Aymara"]),
    l("az", &["Azerbaijani"]),
    l("be", &["Belarusian"]),
    l("bg", &["Bulgarian"]),
    l("bi", &["Bislama"]),
    l("bn", &["Bengali", "Bangla"]),
    l("bs", &["Bosnian"]),
    l("ca", &["Catalan", "Valencian"]),
    l("ch", &["Chamorro"]),
    l("cs", &["Czech"]),
    l("da", &["Danish"]),
    l("de", &["German"]),
    l("dv", &["Divehi", "Dhivehi", "Maldivian"]),
    l("dz", &["Dzongkha"]),
    l("el", &["Greek"]),
    l("en", &["English"]),
    l("es", &["Spanish", "Castilian"]),
    l("et", &["Estonian"]),
    l("eu", &["Basque"]),
    l("fa", &["Persian"]),
    l("ff", &["Fulah"]),
    l("fi", &["Finnish"]),
    l("fj", &["Fijian"]),
    l("fo", &["Faroese"]),
    l("fr", &["French"]),
    l("ga", &["Irish"]),
    l("gl", &["Galician"]),
    l("gn", &["Guarani"]),
    l("gv", &["Manx"]),
    l("ha", &["Hausa"]),
    l("he", &["Hebrew"]),
    l("hi", &["Hindi"]),
    l("ho", &["Hiri Motu"]),
    l("hr", &["Croatian"]),
    l("ht", &["Haitian", "Haitian Creole"]),
    l("hu", &["Hungarian"]),
    l("hy", &["Armenian"]),
    l("id", &["Indonesian"]),
    l("ig", &["Igbo"]),
    l("is", &["Icelandic"]),
    l("it", &["Italian"]),
    l("ja", &["Japanese"]),
    l("ka", &["Georgian"]),
    l("kg", &["Kongo"]),
    l("kk", &["Kazakh"]),
    l("kl", &["Kalaallisut", "Greenlandic"]),
    l("km", &["Central Khmer"]),
    l("ko", &["Korean"]),
    l("ku", &["Kurdish"]),
    l("ky", &["Kirghiz", "Kyrgyz"]),
    l("la", &["Latin"]),
    l("lb", &["Luxembourgish", "Letzeburgesch"]),
    l("ln", &["Lingala"]),
    l("lo", &["Lao"]),
    l("lt", &["Lithuanian"]),
    l("lu", &["Luba-Katanga"]),
    l("lv", &["Latvian"]),
    l("mg", &["Malagasy"]),
    l("mh", &["Marshallese"]),
    l("mi", &["Maori"]),
    l("mk", &["Macedonian"]),
    l("mn", &["Mongolian"]),
    l("ms", &["Malay"]),
    l("mt", &["Maltese"]),
    l("my", &["Burmese"]),
    l("na", &["Nauru"]),
    l("nb", &["Norwegian Bokmål"]),
    l("nd", &["North Ndebele"]),
    l("ne", &["Nepali"]),
    l("nl", &["Dutch", "Flemish"]),
    l("nn", &["Norwegian Nynorsk"]),
    l("no", &["Norwegian"]),
    l("ny", &["Chichewa", "Chewa", "Nyanja"]),
    l("oc", &["Occitan"]),
    l("pa", &["Panjabi", "Punjabi"]),
    l("pl", &["Polish"]),
    l("ps", &["Pushto", "Pashto"]),
    l("pt", &["Portuguese"]),
    l("qu", &["Quechua"]),
    l("rm", &["Romansh"]),
    l("rn", &["Rundi"]),
    l("ro", &["Romanian", "Moldavian", "Moldovan"]),
    l("ru", &["Russian"]),
    l("rw", &["Kinyarwanda"]),
    l("sg", &["Sango"]),
    l("si", &["Sinhala", "Sinhalese"]),
    l("sk", &["Slovak"]),
    l("sl", &["Slovenian"]),
    l("sm", &["Samoan"]),
    l("sn", &["Shona"]),
    l("so", &["Somali"]),
    l("sq", &["Albanian"]),
    l("sr", &["Serbian"]),
    l("ss", &["Swati"]),
    l("st", &["Southern Sotho"]),
    l("sv", &["Swedish"]),
    l("sw", &["Swahili"]),
    l("ta", &["Tamil"]),
    l("tg", &["Tajik"]),
    l("th", &["Thai"]),
    l("ti", &["Tigrinya"]),
    l("tk", &["Turkmen"]),
    l("tl", &["Tagalog"]),
    l("tn", &["Tswana"]),
    l("to", &["Tonga (Tonga Islands)"]),
    l("tr", &["Turkish"]),
    l("uk", &["Ukrainian"]),
    l("ur", &["Urdu"]),
    l("uz", &["Uzbek"]),
    l("vi", &["Vietnamese"]),
    l("xh", &["Xhosa"]),
    l("yo", &["Yoruba"]),
    l("zh", &["Chinese"]),
    l("zu", &["Zulu"]),
];
