use super::Verse;

struct BuiltinVerse {
    surah: &'static str,
    verse_number: u32,
    arabic: &'static str,
    french: &'static str,
    audio_file: &'static str,
}

const BUILTIN: [BuiltinVerse; 3] = [
    BuiltinVerse {
        surah: "Sourate At-Tahrim",
        verse_number: 10,
        arabic: "ضَرَبَ اللَّهُ مَثَلًا لِلَّذِينَ كَفَرُوا امْرَأَتَ نُوحٍ وَامْرَأَتَ لُوطٍ كَانَتَا تَحْتَ عَبْدَيْنِ مِنْ عِبَادِنَا صَالِحَيْنِ فَخَانَتَاهُمَا فَلَمْ يُغْنِيَا عَنْهُمَا مِنَ اللَّهِ شَيْئًا وَقِيلَ ادْخُلَا النَّارَ مَعَ الدَّاخِلِينَ",
        french: "Allah donne un exemple aux mécréants : la femme de Noé et la femme de Lot. Chaque était marié à l'un de Nos justes serviteurs, mais il l'a trahi. Leurs maris étaient donc de aucun avantage pour eux contre Allah. Il leur fut dit à tous deux : « Entrez dans le Feu, avec le autres! »",
        audio_file: "000.mp3",
    },
    BuiltinVerse {
        surah: "Sourate Al-Baqarah",
        verse_number: 255,
        arabic: "اللَّهُ لَا إِلَٰهَ إِلَّا هُوَ الْحَيُّ الْقَيُّومُ ۚ لَا تَأْخُذُهُ سِنَةٌ وَلَا نَوْمٌ ۚ لَهُ مَا فِي السَّمَاوَاتِ وَمَا فِي الْأَرْضِ ۗ مَنْ ذَا الَّذِي يَشْفَعُ عِنْدَهُ إِلَّا بِإِذْنِهِ ۚ يَعْلَمُ مَا بَيْنَ أَيْدِيهِمْ وَمَا خَلْفَهُمْ ۖ وَلَا يُحِيطُونَ بِشَيْءٍ مِنْ عِلْمِهِ إِلَّا بِمَا شَاءَ ۚ وَسِعَ كُرْسِيُّهُ السَّمَاوَاتِ وَالْأَرْضَ ۖ وَلَا يَئُودُهُ حِفْظُهُمَا ۚ وَهُوَ الْعَلِيُّ الْعَظِيمُ",
        french: "Allah! Point de divinité à part Lui, le Vivant, Celui qui subsiste par lui-même. Ni somnolence ni sommeil ne Le saisissent. À Lui appartient tout ce qui est dans les cieux et sur la terre. Qui peut intercéder auprès de Lui sans Sa permission? Il connaît leur passé et leur futur. Et, de Sa science, ils n'embrassent que ce qu'Il veut. Son Trône déborde les cieux et la terre, dont la garde ne Lui coûte aucune peine. Et Il est le Très Haut, le Très Grand.",
        audio_file: "255.mp3",
    },
    BuiltinVerse {
        surah: "Sourate Al-Ikhlas",
        verse_number: 1,
        arabic: "قُلْ هُوَ اللّٰهُ اَحَدٌ(1) اَللّٰهُ الصَّمَدُ(2) لَمْ یَلِدْ ﳔ وَ لَمْ یُوْلَدْ(3) وَ لَمْ یَكُنْ لَّهٗ كُفُوًا اَحَدٌ(4)",
        french: "Dis : Il est Dieu, l'Unique (1) Dieu, l'Éternel, l'Éternel (2) Il n'a pas engendré ni n'a été engendré (3) et il n'y a personne qui Lui soit égal (4)",
        audio_file: "112.mp3",
    },
];

pub(super) fn builtin_verses() -> Vec<Verse> {
    BUILTIN
        .iter()
        .map(|v| Verse {
            surah: v.surah.to_string(),
            verse_number: v.verse_number,
            arabic: v.arabic.to_string(),
            french: v.french.to_string(),
            audio_file: v.audio_file.to_string(),
        })
        .collect()
}
