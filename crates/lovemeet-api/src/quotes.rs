use rand::Rng;
use rand::seq::IndexedRandom;

use lovemeet_types::{Language, Quote};

use Language::{English, Sinhala, Tamil};

const fn q(
    id: &'static str,
    language: Language,
    quote: &'static str,
    author: Option<&'static str>,
) -> Quote {
    Quote {
        id,
        quote,
        language,
        author,
    }
}

pub static QUOTES: [Quote; 75] = [
    q("1", English, "The best thing to hold onto in life is each other.", Some("Audrey Hepburn")),
    q("2", English, "Love is composed of a single soul inhabiting two bodies.", Some("Aristotle")),
    q("3", English, "You know you're in love when you can't fall asleep because reality is finally better than your dreams.", Some("Dr. Seuss")),
    q("4", English, "In all the world, there is no heart for me like yours.", Some("Maya Angelou")),
    q("5", English, "Love looks not with the eyes, but with the mind.", Some("William Shakespeare")),
    q("6", English, "I have for the first time found what I can truly love - I have found you.", Some("Jane Eyre")),
    q("7", English, "The best love is the kind that awakens the soul.", Some("Nicholas Sparks")),
    q("8", English, "Whatever our souls are made of, his and mine are the same.", Some("Emily Bronte")),
    q("9", English, "Love is when the other person's happiness is more important than your own.", Some("H. Jackson Brown Jr.")),
    q("10", English, "My heart is and always will be yours.", Some("Jane Austen")),
    q("11", English, "I love you without knowing how, or when, or from where.", Some("Pablo Neruda")),
    q("12", English, "Being deeply loved by someone gives you strength.", Some("Laozi")),
    q("13", English, "You are my today and all of my tomorrows.", Some("Leo Christopher")),
    q("14", English, "I would find you in any life, in any world.", None),
    q("15", English, "She is my greatest happiness and my deepest sorrow.", None),
    q("16", English, "Love is a journey with you I never wanted to end.", None),
    q("17", English, "Your smile is my favorite hello and your hug is my favorite goodbye.", None),
    q("18", English, "I fell in love the way you fall asleep; slowly, then all at once.", Some("John Green")),
    q("19", English, "Every love story is beautiful, but ours is my favorite.", None),
    q("20", English, "You are my most beautiful thought.", None),
    q("21", English, "Growing old with you is my greatest adventure.", None),
    q("22", English, "Love is the greatest gift in this world.", None),
    q("23", English, "In your eyes, I found my home.", None),
    q("24", English, "Forever is not long enough with you.", None),
    q("25", English, "You complete me in every way.", None),
    q("26", Tamil, "உன்னோடு இருக்கும் ஒவ்வொரு நிமிடமும் அழகானது.", Some("நிச்சயமற்றவர்")),
    q("27", Tamil, "காதல் என்பது வெறும் வார்த்தை அல்ல, அது ஒரு வாழ்க்கை.", Some("நிச்சயமற்றவர்")),
    q("28", Tamil, "உன் கண்களில் என் உலகத்தை காண்கிறேன்.", Some("நிச்சயமற்றவர்")),
    q("29", Tamil, "நீ இல்லாமல் ஜீவனம் சாத்தியம் இல்லை.", Some("நிச்சயமற்றவர்")),
    q("30", Tamil, "உன்னை நினைக்கும் போது என் இதயம் வேகமாக துடிக்கிறது.", Some("நிச்சயமற்றவர்")),
    q("31", Tamil, "உன் புன்னகை என் உலகத்தை நிறை செய்கிறது.", Some("நிச்சயமற்றவர்")),
    q("32", Tamil, "என் ஆত்மா உன்ன தேடிக்கொண்டே இருக்கிறது.", Some("நிச்சயமற்றவர்")),
    q("33", Tamil, "நீ எனக்கு சொர்க்கத்தை தரும் அற்புத மனிதர்.", Some("நிச்சயமற்றவர்")),
    q("34", Tamil, "உன்னோடு வாய்க்கையான ஒவ்வொரு நாளும் ஆசீர்வாதம்.", Some("நிச்சயமற்றவர்")),
    q("35", Tamil, "உன் கைகளில் நான் பாதுகாப்பாக உணர்கிறேன்.", Some("நிச்சயமற்றவர்")),
    q("36", Tamil, "உன் அருகில் இருப்பது என் பெரிய வரம்.", Some("நிச்சயமற்றவர்")),
    q("37", Tamil, "நீ என் கனவுகளை உண்மையாக்கிய மாறத்.", Some("நிச்சயமற்றவர்")),
    q("38", Tamil, "உன் விளக்கு என் உள்ளம் வெளிச்சம் உண்டை.", Some("நிச்சயமற்றவர்")),
    q("39", Tamil, "உன் நெஞ்சத்தில் எனக்கு இடம் கிடைக்கை பெரிய பணி.", Some("நிச்சயமற்றவர்")),
    q("40", Tamil, "உன்னை இழந்தால் வாழ்க்கை வெறுமணை.", Some("நிச்சயமற்றவர்")),
    q("41", Tamil, "என் உயிரை விட மதிப்புள்ளது உன் அன்பு.", Some("நிச்சயமற்றவர்")),
    q("42", Tamil, "உன் நேரடி போக்குவாரணம் உடைய புருஷனாக விரும்புகிறேன்.", Some("நிச்சயமற்றவர்")),
    q("43", Tamil, "நீ என்றும் என்னை கைவிட்டுவிடாய் என்ற நம்பிக்கை.", Some("நிச்சயமற்றவர்")),
    q("44", Tamil, "உன் சொல்லை கேட்டு என் இதயம் சூடாகிறது.", Some("நிச்சயமற்றவர்")),
    q("45", Tamil, "உன் உடன் இருக்கும் வரை நான் உயிரோடு இருக்கிறேன்.", Some("நிச்சயமற்றவர்")),
    q("46", Tamil, "உன் அழகு என் ஆத்மாவை கொள்ளை கொண்டுவிட்டது.", Some("நிச்சயமற்றவர்")),
    q("47", Tamil, "நீ இல்லாமல் நான் வெறுமே சிலை.", Some("நிச்சயமற்றவர்")),
    q("48", Tamil, "உனக்கு என் நெஞ்சம் முழுதும் சமர்ப்பணை.", Some("நிச்சயமற்றவர்")),
    q("49", Tamil, "உன் மணம் என்னை மலைக்கவைக்கிறது.", Some("நிச்சயமற்றவர்")),
    q("50", Tamil, "என் வாழ்க்கையில் நீ மிக முக்கியமான அதிஷ்டானை.", Some("நிச்சயமற்றவர்")),
    q("51", Sinhala, "ආදරය කියන්නේ ජීවිතයේ ලස්සනම සිහිනයයි.", Some("අඥාත")),
    q("52", Sinhala, "ඔබ මගේ ලෝකයේ එකම තරුවයි.", Some("අඥාත")),
    q("53", Sinhala, "සැබෑ ආදරය කිසිදා නිම නොවේ.", Some("අඥාත")),
    q("54", Sinhala, "ඔබ ඉන්නා සෑම මොහොතම ස්වර්ගයි.", Some("අඥාත")),
    q("55", Sinhala, "මගේ හૃදයය සදහා ඔබ පමණක් ඕනැයි.", Some("අඥාත")),
    q("56", Sinhala, "ඔබගේ හිනිගෙන බලාබලා මගේ ජීවනය හරවා බliwawa.", Some("අඥාත")),
    q("57", Sinhala, "ඔබ නැතිව මට ජීවිතයක් නැත.", Some("අඥාත")),
    q("58", Sinhala, "ඔබගේ පෙම්වතාව මගේ အහිසිව බිම් එපා.", Some("අඥාත")),
    q("59", Sinhala, "ඔබගේ ගිණුපුටුව ගිණුපුටුව එතුම් සිටිනවා.", Some("අඥාත")),
    q("60", Sinhala, "සෙම් තුල ඔබ මගේ සැපෙන ස්වාධීන කරනවා.", Some("අඥාත")),
    q("61", Sinhala, "ඔබ නොවුණු දුකට කිසිදු ස්های නැත.", Some("අඥාත")),
    q("62", Sinhala, "ඔබගේ ආලිංගනය මගේ රැකවරණය.", Some("අඥාත")),
    q("63", Sinhala, "ඔබගේ සිතුවම විය නිර්ණයකි.", Some("අඥාත")),
    q("64", Sinhala, "ඔබ මගේ අනන්තයි.", Some("අඥාත")),
    q("65", Sinhala, "ඔබගේ පිසිනි ඇසට මගේ සිතුවම නිහාල්.", Some("අඥාත")),
    q("66", Sinhala, "ඔබ සිටින තැන සිටින බිම සුවන්නට ස්වර්ගයි.", Some("අඥාත")),
    q("67", Sinhala, "ඔබගේ ස්එතිතුවම මගේ බලය.", Some("අඥාත")),
    q("68", Sinhala, "ඔබ නොවිට කිසිදු උත්තරයක් නැත.", Some("අඥාත")),
    q("69", Sinhala, "ජීවිතයේ සැම දිනම ඔබ එක ස්වර්ගයි.", Some("අඥාත")),
    q("70", Sinhala, "ඔබගේ සිතුවමට දිනින් දින ගැතුම් වැඩි.", Some("අඥාත")),
    q("71", Sinhala, "ඔබ මගේ සිතේ සදා සිටිනවා.", Some("අඥාත")),
    q("72", Sinhala, "ඔබ ඉන්නා එකයි මගේ සිතිවිල්.", Some("අඥාත")),
    q("73", Sinhala, "ඔබගේ පෙම්වතාව අවිනිශ්චිතයි.", Some("අඥාත")),
    q("74", Sinhala, "ඔබ නොවුණු සිතින් කිසිම සිතුවම නැත.", Some("අඥාත")),
    q("75", Sinhala, "ඔබ සිටින තුරු, සිතුවම ඉතිරි ඉතිරි.", Some("අඥාත")),
];

pub fn quotes_in(language: Language) -> Vec<&'static Quote> {
    QUOTES.iter().filter(|q| q.language == language).collect()
}

pub fn quote(id: &str) -> Option<&'static Quote> {
    QUOTES.iter().find(|q| q.id == id)
}

/// A random quote in `language` other than `current`, falling back to the
/// first quote of that language when nothing else is available.
pub fn next_quote(language: Language, current: Option<&str>) -> Option<&'static Quote> {
    next_quote_with(&mut rand::rng(), language, current)
}

pub fn next_quote_with<R: Rng + ?Sized>(
    rng: &mut R,
    language: Language,
    current: Option<&str>,
) -> Option<&'static Quote> {
    let pool = quotes_in(language);
    let others: Vec<&'static Quote> = pool
        .iter()
        .copied()
        .filter(|q| Some(q.id) != current)
        .collect();
    others.choose(rng).copied().or_else(|| pool.first().copied())
}
