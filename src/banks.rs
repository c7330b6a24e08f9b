// ============================================
// src/banks.rs (出題データ)
// ============================================

use crate::questions::{KanjiQuestion, Question};

/// ひらがなの出題リスト（濁点・半濁点を含む71音）
pub fn hiragana() -> Vec<Question> {
    vec![
        Question::new("あ", "a"),
        Question::new("い", "i"),
        Question::new("う", "u"),
        Question::new("え", "e"),
        Question::new("お", "o"),
        Question::new("か", "ka"),
        Question::new("き", "ki"),
        Question::new("く", "ku"),
        Question::new("け", "ke"),
        Question::new("こ", "ko"),
        Question::new("が", "ga"),
        Question::new("ぎ", "gi"),
        Question::new("ぐ", "gu"),
        Question::new("げ", "ge"),
        Question::new("ご", "go"),
        Question::new("さ", "sa"),
        Question::new("し", "shi"),
        Question::new("す", "su"),
        Question::new("せ", "se"),
        Question::new("そ", "so"),
        Question::new("ざ", "za"),
        Question::new("じ", "ji"),
        Question::new("ず", "zu"),
        Question::new("ぜ", "ze"),
        Question::new("ぞ", "zo"),
        Question::new("た", "ta"),
        Question::new("ち", "chi"),
        Question::new("つ", "tsu"),
        Question::new("て", "te"),
        Question::new("と", "to"),
        Question::new("だ", "da"),
        // じ・ず と同音なので、逆方向の出題用にヒントを添える
        Question::new("ぢ", "ji").context("ta-row"),
        Question::new("づ", "zu").context("ta-row"),
        Question::new("で", "de"),
        Question::new("ど", "do"),
        Question::new("な", "na"),
        Question::new("に", "ni"),
        Question::new("ぬ", "nu"),
        Question::new("ね", "ne"),
        Question::new("の", "no"),
        Question::new("は", "ha"),
        Question::new("ひ", "hi"),
        Question::new("ふ", "fu").alternates(&["hu"]),
        Question::new("へ", "he"),
        Question::new("ほ", "ho"),
        Question::new("ば", "ba"),
        Question::new("び", "bi"),
        Question::new("ぶ", "bu"),
        Question::new("べ", "be"),
        Question::new("ぼ", "bo"),
        Question::new("ぱ", "pa"),
        Question::new("ぴ", "pi"),
        Question::new("ぷ", "pu"),
        Question::new("ぺ", "pe"),
        Question::new("ぽ", "po"),
        Question::new("ま", "ma"),
        Question::new("み", "mi"),
        Question::new("む", "mu"),
        Question::new("め", "me"),
        Question::new("も", "mo"),
        Question::new("や", "ya"),
        Question::new("ゆ", "yu"),
        Question::new("よ", "yo"),
        Question::new("ら", "ra"),
        Question::new("り", "ri"),
        Question::new("る", "ru"),
        Question::new("れ", "re"),
        Question::new("ろ", "ro"),
        Question::new("わ", "wa"),
        Question::new("を", "wo").alternates(&["o"]).context("particle"),
        Question::new("ん", "n"),
    ]
}

/// カタカナの出題リスト（ひらがなと同じ構成）
pub fn katakana() -> Vec<Question> {
    vec![
        Question::new("ア", "a"),
        Question::new("イ", "i"),
        Question::new("ウ", "u"),
        Question::new("エ", "e"),
        Question::new("オ", "o"),
        Question::new("カ", "ka"),
        Question::new("キ", "ki"),
        Question::new("ク", "ku"),
        Question::new("ケ", "ke"),
        Question::new("コ", "ko"),
        Question::new("ガ", "ga"),
        Question::new("ギ", "gi"),
        Question::new("グ", "gu"),
        Question::new("ゲ", "ge"),
        Question::new("ゴ", "go"),
        Question::new("サ", "sa"),
        Question::new("シ", "shi"),
        Question::new("ス", "su"),
        Question::new("セ", "se"),
        Question::new("ソ", "so"),
        Question::new("ザ", "za"),
        Question::new("ジ", "ji"),
        Question::new("ズ", "zu"),
        Question::new("ゼ", "ze"),
        Question::new("ゾ", "zo"),
        Question::new("タ", "ta"),
        Question::new("チ", "chi"),
        Question::new("ツ", "tsu"),
        Question::new("テ", "te"),
        Question::new("ト", "to"),
        Question::new("ダ", "da"),
        Question::new("ヂ", "ji").context("ta-row"),
        Question::new("ヅ", "zu").context("ta-row"),
        Question::new("デ", "de"),
        Question::new("ド", "do"),
        Question::new("ナ", "na"),
        Question::new("ニ", "ni"),
        Question::new("ヌ", "nu"),
        Question::new("ネ", "ne"),
        Question::new("ノ", "no"),
        Question::new("ハ", "ha"),
        Question::new("ヒ", "hi"),
        Question::new("フ", "fu").alternates(&["hu"]),
        Question::new("ヘ", "he"),
        Question::new("ホ", "ho"),
        Question::new("バ", "ba"),
        Question::new("ビ", "bi"),
        Question::new("ブ", "bu"),
        Question::new("ベ", "be"),
        Question::new("ボ", "bo"),
        Question::new("パ", "pa"),
        Question::new("ピ", "pi"),
        Question::new("プ", "pu"),
        Question::new("ペ", "pe"),
        Question::new("ポ", "po"),
        Question::new("マ", "ma"),
        Question::new("ミ", "mi"),
        Question::new("ム", "mu"),
        Question::new("メ", "me"),
        Question::new("モ", "mo"),
        Question::new("ヤ", "ya"),
        Question::new("ユ", "yu"),
        Question::new("ヨ", "yo"),
        Question::new("ラ", "ra"),
        Question::new("リ", "ri"),
        Question::new("ル", "ru"),
        Question::new("レ", "re"),
        Question::new("ロ", "ro"),
        Question::new("ワ", "wa"),
        Question::new("ヲ", "wo").alternates(&["o"]).context("particle"),
        Question::new("ン", "n"),
    ]
}

/// 漢字の出題リスト（初級の基本漢字）
pub fn kanji() -> Vec<KanjiQuestion> {
    vec![
        KanjiQuestion::new("上", "うえ", "Above/On").readings(&["じょう", "うわ"]),
        KanjiQuestion::new("下", "した", "Below/Under").readings(&["か", "げ"]),
        KanjiQuestion::new("日", "ひ", "Day/Sun").readings(&["にち", "じつ"]),
        KanjiQuestion::new("月", "つき", "Moon/Month").readings(&["げつ", "がつ"]),
        KanjiQuestion::new("火", "ひ", "Fire").readings(&["か"]),
        KanjiQuestion::new("水", "みず", "Water").readings(&["すい"]),
        KanjiQuestion::new("木", "き", "Tree/Wood").readings(&["もく"]),
        KanjiQuestion::new("金", "かね", "Gold/Money").readings(&["きん"]),
        KanjiQuestion::new("土", "つち", "Soil/Earth").readings(&["ど"]),
        KanjiQuestion::new("山", "やま", "Mountain").readings(&["さん"]),
        KanjiQuestion::new("川", "かわ", "River").readings(&["せん"]),
        KanjiQuestion::new("人", "ひと", "Person").readings(&["じん", "にん"]),
        KanjiQuestion::new("中", "なか", "Middle/Inside").readings(&["ちゅう"]),
        KanjiQuestion::new("大", "おおきい", "Big/Large").readings(&["だい", "たい"]),
        KanjiQuestion::new("小", "ちいさい", "Small").readings(&["しょう"]),
        KanjiQuestion::new("本", "ほん", "Book/Origin"),
        KanjiQuestion::new("学", "がく", "Study/Learning"),
        KanjiQuestion::new("生", "せい", "Life/Student").readings(&["なま", "い"]),
        KanjiQuestion::new("円", "えん", "Circle/Yen"),
        KanjiQuestion::new("時", "とき", "Time/Hour").readings(&["じ"]),
    ]
}

/// 語彙クイズ 第1章（Genki p.38-39）
pub fn vocab_chapter1() -> Vec<Question> {
    vec![
        Question::new("College/University", "だいがく").alternates(&["daigaku"]).kanji("大学"),
        Question::new("High School", "こうこう").alternates(&["koukou"]).kanji("高校"),
        Question::new("Student", "がくせい").alternates(&["gakusei"]).kanji("学生"),
        Question::new("College Student", "だいがくせい").alternates(&["daigakusei"]).kanji("大学生"),
        Question::new("International Student", "りゅうがくせい").alternates(&["ryuugakusei"]).kanji("留学生"),
        Question::new("Teacher/Professor", "せんせい").alternates(&["sensei"]).kanji("先生"),
        Question::new("First Year Student", "いちねんせい").alternates(&["ichinensei"]).kanji("一年生"),
        Question::new("Major", "せんこう").alternates(&["senkou"]).kanji("専攻"),
        Question::new("I", "わたし").alternates(&["watashi"]).kanji("私"),
        Question::new("Friend", "ともだち").alternates(&["tomodachi"]).kanji("友達"),
        Question::new("Mr/Ms", "さん").alternates(&["san"]),
        Question::new("Japanese People", "にほんじん").alternates(&["nihonjin"]).kanji("日本人"),
        Question::new("Now", "いま").alternates(&["ima"]).kanji("今"),
        Question::new("AM", "ごぜん").alternates(&["gozen"]).kanji("午前"),
        Question::new("PM", "ごご").alternates(&["gogo"]).kanji("午後"),
        Question::new("O'Clock", "じ").alternates(&["ji"]).kanji("時"),
        Question::new("One O'Clock", "いちじ").alternates(&["ichiji"]).kanji("一時"),
        Question::new("Half", "はん").alternates(&["han"]).kanji("半"),
        Question::new("2:30", "にじはん").alternates(&["nijihan"]).kanji("二時半"),
        Question::new("Japan", "にほん").alternates(&["nihon"]).kanji("日本"),
        Question::new("America/USA", "アメリカ").alternates(&["amerika"]),
        Question::new("Language", "ご").alternates(&["go"]).kanji("語"),
        Question::new("Japanese Language", "にほんご").alternates(&["nihongo"]).kanji("日本語"),
        Question::new("Years Old", "さい").alternates(&["sai"]).kanji("歳"),
        Question::new("Telephone/Phone", "でんわ").alternates(&["denwa"]).kanji("電話"),
        Question::new("Number", "ばんごう").alternates(&["bangou"]).kanji("番号"),
        Question::new("Name", "なまえ").alternates(&["namae"]).kanji("名前"),
        Question::new("What", "なん").alternates(&["nan", "nani", "なに"]).kanji("何"),
        Question::new("Um", "あの").alternates(&["ano"]),
        Question::new("Yes", "はい").alternates(&["hai"]),
        Question::new("That's Right", "そうです").alternates(&["soudesu"]),
        Question::new("I See/Is That So", "そうですか").alternates(&["soudesuka"]),
        Question::new("Britain", "イギリス").alternates(&["igirisu"]),
        Question::new("Australia", "オーストラリア").alternates(&["oosutoraria"]),
        Question::new("Korea", "かんこく").alternates(&["kankoku"]).kanji("韓国"),
        Question::new("China", "ちゅうごく").alternates(&["chuugoku"]).kanji("中国"),
        Question::new("India", "インド").alternates(&["indo"]),
        Question::new("Egypt", "エジプト").alternates(&["ejiputo"]),
        Question::new("Philippines", "フィリピン").alternates(&["firipin"]),
        Question::new("Asian Studies", "アジアけんきゅう").alternates(&["ajiakenkyuu"]).kanji("アジア研究"),
        Question::new("Economics", "けいざい").alternates(&["keizai"]).kanji("経済"),
        Question::new("Engineering", "こうがく").alternates(&["kougaku"]).kanji("工学"),
        Question::new("International Relations", "こくさいかんけい").alternates(&["kokusaikankei"]).kanji("国際関係"),
        Question::new("Computer", "コンピュータ").alternates(&["konpyuuta"]),
        Question::new("Politics", "せいじ").alternates(&["seiji"]).kanji("政治"),
        Question::new("Biology", "せいぶつがく").alternates(&["seibutsugaku"]).kanji("生物学"),
        Question::new("Business", "ビジネス").alternates(&["bijinesu"]),
        Question::new("Literature", "ぶんがく").alternates(&["bungaku"]).kanji("文学"),
        Question::new("History", "れきし").alternates(&["rekishi"]).kanji("歴史"),
        Question::new("Doctor", "いしゃ").alternates(&["isha"]).kanji("医者"),
        Question::new("Office Worker", "かいしゃいん").alternates(&["kaishain"]).kanji("会社員"),
        Question::new("Nurse", "かんごし").alternates(&["kangoshi"]).kanji("看護師"),
        Question::new("High School Student", "こうこうせい").alternates(&["koukousei"]).kanji("高校生"),
        Question::new("Housewife", "しゅふ").alternates(&["shufu"]).kanji("主婦"),
        Question::new("Graduate Student", "だいがくいんせい").alternates(&["daigakuinsei"]).kanji("大学院生"),
        Question::new("Lawyer", "べんごし").alternates(&["bengoshi"]).kanji("弁護士"),
        Question::new("Mother", "おかあさん").alternates(&["okaasan"]).kanji("お母さん"),
        Question::new("Father", "おとうさん").alternates(&["otousan"]).kanji("お父さん"),
        Question::new("Older Sister", "おねえさん").alternates(&["oneesan"]).kanji("お姉さん"),
        Question::new("Older Brother", "おにいさん").alternates(&["oniisan"]).kanji("お兄さん"),
        Question::new("Younger Sister", "いもうと").alternates(&["imouto"]).kanji("妹"),
        Question::new("Younger Brother", "おとうと").alternates(&["otouto"]).kanji("弟"),
    ]
}

/// 語彙クイズ 第3章（Genki p.84-85）
pub fn vocab_chapter3() -> Vec<Question> {
    vec![
        Question::new("Movie", "えいが").alternates(&["eiga"]).kanji("映画"),
        Question::new("Music", "おんがく").alternates(&["ongaku"]).kanji("音楽"),
        Question::new("Magazine", "ざっし").alternates(&["zasshi"]).kanji("雑誌"),
        Question::new("Sports", "スポーツ").alternates(&["supootsu"]),
        Question::new("Date (Romantic)", "デート").alternates(&["deeto"]),
        Question::new("Tennis", "テニス").alternates(&["tenisu"]),
        Question::new("TV", "テレビ").alternates(&["terebi"]),
        Question::new("Ice Cream", "アイスクリーム").alternates(&["aisukuriimu"]),
        Question::new("Hamburger", "ハンバーガー").alternates(&["hanbaagaa"]),
        Question::new("Sake/Alcohol", "おさけ").alternates(&["osake"]).kanji("お酒"),
        Question::new("Green Tea/Tea", "おちゃ").alternates(&["ocha"]).kanji("お茶"),
        Question::new("Coffee", "コーヒー").alternates(&["koohii"]),
        Question::new("Water", "みず").alternates(&["mizu"]).kanji("水"),
        Question::new("Breakfast", "あさごはん").alternates(&["asagohan"]).kanji("朝ご飯"),
        Question::new("Lunch", "ひるごはん").alternates(&["hirugohan"]).kanji("昼ご飯"),
        Question::new("Dinner", "ばんごはん").alternates(&["bangohan"]).kanji("晩ご飯"),
        Question::new("Home/House/My Place", "いえ").alternates(&["ie", "uchi", "うち"]).kanji("家"),
        Question::new("School", "がっこう").alternates(&["gakkou"]).kanji("学校"),
        Question::new("Cafe", "カフェ").alternates(&["kafe"]),
        Question::new("Tomorrow", "あした").alternates(&["ashita"]).kanji("明日"),
        Question::new("Today", "きょう").alternates(&["kyou"]).kanji("今日"),
        Question::new("Morning", "あさ").alternates(&["asa"]).kanji("朝"),
        Question::new("Tonight", "こんばん").alternates(&["konban"]).kanji("今晩"),
        Question::new("Every Day", "まいにち").alternates(&["mainichi"]).kanji("毎日"),
        Question::new("Every Night", "まいばん").alternates(&["maiban"]).kanji("毎晩"),
        Question::new("Weekend", "しゅうまつ").alternates(&["shuumatsu"]).kanji("週末"),
        Question::new("Saturday", "どようび").alternates(&["doyoubi"]).kanji("土曜日"),
        Question::new("Sunday", "にちようび").alternates(&["nichiyoubi"]).kanji("日曜日"),
        Question::new("When", "いつ").alternates(&["itsu"]),
        Question::new("At About/Around", "ごろ").alternates(&["goro"]),
        Question::new("To Go", "いく").alternates(&["iku"]).kanji("行く"),
        Question::new("To Go Back/To Return", "かえる").alternates(&["kaeru"]).kanji("帰る"),
        Question::new("To Listen/To Hear", "きく").alternates(&["kiku"]).kanji("聞く"),
        Question::new("To Drink", "のむ").alternates(&["nomu"]).kanji("飲む"),
        Question::new("To Speak/To Talk", "はなす").alternates(&["hanasu"]).kanji("話す"),
        Question::new("To Read", "よむ").alternates(&["yomu"]).kanji("読む"),
        Question::new("To Get Up", "おきる").alternates(&["okiru"]).kanji("起きる"),
        Question::new("To Eat", "たべる").alternates(&["taberu"]).kanji("食べる"),
        Question::new("To Sleep/To Go To Sleep", "ねる").alternates(&["neru"]).kanji("寝る"),
        Question::new("To See/To Look At/To Watch", "みる").alternates(&["miru"]).kanji("見る"),
        Question::new("To Come", "くる").alternates(&["kuru"]).kanji("来る"),
        Question::new("To Do", "する").alternates(&["suru"]),
        Question::new("To Study", "べんきょうする").alternates(&["benkyousuru"]).kanji("勉強する"),
        Question::new("Good", "いい").alternates(&["ii"]),
        Question::new("Early", "はやい").alternates(&["hayai"]).kanji("早い"),
        Question::new("Not Much", "あまり").alternates(&["amari"]),
        Question::new("Not At All", "ぜんぜん").alternates(&["zenzen"]).kanji("全然"),
        Question::new("Usually", "たいてい").alternates(&["taitei"]),
        Question::new("A Little", "ちょっと").alternates(&["chotto"]),
        Question::new("Sometimes", "ときどき").alternates(&["tokidoki"]).kanji("時々"),
        Question::new("Often/Much", "よく").alternates(&["yoku"]),
        Question::new("That's Right/Let Me See", "そうですね").alternates(&["soudesune"]),
        Question::new("But", "でも").alternates(&["demo"]),
        Question::new("How About...?/How Is...?", "どうですか").alternates(&["doudesuka"]),
        Question::new("Yes (Casual)", "ええ").alternates(&["ee"]),
    ]
}

/// 語彙クイズ 第4章（Genki p.104-106）
pub fn vocab_chapter4() -> Vec<Question> {
    vec![
        Question::new("Game", "ゲーム").alternates(&["geemu"]),
        Question::new("Part-Time Job", "アルバイト").alternates(&["arubaito", "バイト"]),
        Question::new("Shopping", "かいもの").alternates(&["kaimono"]).kanji("買い物"),
        Question::new("Class", "クラス").alternates(&["kurasu"]),
        Question::new("Dog", "いぬ").alternates(&["inu"]).kanji("犬"),
        Question::new("Cat", "ねこ").alternates(&["neko"]).kanji("猫"),
        Question::new("Person", "ひと").alternates(&["hito"]).kanji("人"),
        Question::new("Child", "こども").alternates(&["kodomo"]).kanji("子供"),
        Question::new("You", "あなた").alternates(&["anata"]),
        Question::new("Chair", "いす").alternates(&["isu"]),
        Question::new("Desk", "つくえ").alternates(&["tsukue"]).kanji("机"),
        Question::new("Picture/Photograph", "しゃしん").alternates(&["shashin"]).kanji("写真"),
        Question::new("Flower", "はな").alternates(&["hana"]).kanji("花"),
        Question::new("Term Paper", "レポート").alternates(&["repooto"]),
        Question::new("Rice/Meal", "ごはん").alternates(&["gohan"]).kanji("ご飯"),
        Question::new("Bread", "パン").alternates(&["pan"]),
        Question::new("Temple", "おてら").alternates(&["otera"]).kanji("お寺"),
        Question::new("Park", "こうえん").alternates(&["kouen"]).kanji("公園"),
        Question::new("Supermarket", "スーパー").alternates(&["suupaa"]),
        Question::new("Bus Stop", "バスてい").alternates(&["basutei"]).kanji("バス停"),
        Question::new("Hospital", "びょういん").alternates(&["byouin"]).kanji("病院"),
        Question::new("Hotel", "ホテル").alternates(&["hoteru"]),
        Question::new("Bookstore", "ほんや").alternates(&["honya"]).kanji("本屋"),
        Question::new("Town/City", "まち").alternates(&["machi"]).kanji("町"),
        Question::new("Restaurant", "レストラン").alternates(&["resutoran"]),
        Question::new("Yesterday", "きのう").alternates(&["kinou"]).kanji("昨日"),
        Question::new("Hours", "じかん").alternates(&["jikan"]).kanji("時間"),
        Question::new("One Hour", "いちじかん").alternates(&["ichijikan"]).kanji("一時間"),
        Question::new("Last Week", "せんしゅう").alternates(&["senshuu"]).kanji("先週"),
        Question::new("When/At The Time Of", "とき").alternates(&["toki"]).kanji("時"),
        Question::new("Monday", "げつようび").alternates(&["getsuyoubi"]).kanji("月曜日"),
        Question::new("Tuesday", "かようび").alternates(&["kayoubi"]).kanji("火曜日"),
        Question::new("Wednesday", "すいようび").alternates(&["suiyoubi"]).kanji("水曜日"),
        Question::new("Thursday", "もくようび").alternates(&["mokuyoubi"]).kanji("木曜日"),
        Question::new("Friday", "きんようび").alternates(&["kinyoubi"]).kanji("金曜日"),
        Question::new("To Meet A Person/To See A Person", "あう").alternates(&["au"]).kanji("会う"),
        Question::new("There Is", "ある").alternates(&["aru"]),
        Question::new("To Buy", "かう").alternates(&["kau"]).kanji("買う"),
        Question::new("To Write", "かく").alternates(&["kaku"]).kanji("書く"),
        Question::new("To Take A Picture", "とる").alternates(&["toru"]).kanji("撮る"),
        Question::new("To Wait", "まつ").alternates(&["matsu"]).kanji("待つ"),
        Question::new("To Understand", "わかる").alternates(&["wakaru"]),
        Question::new("About", "ぐらい").alternates(&["gurai"]),
        Question::new("I'm Sorry", "ごめんなさい").alternates(&["gomennasai"]),
        Question::new("And Then", "それから").alternates(&["sorekara"]),
        Question::new("So/Therefore", "だから").alternates(&["dakara"]),
        Question::new("Many/A Lot", "たくさん").alternates(&["takusan"]),
        Question::new("Together With/And", "と").alternates(&["to"]),
        Question::new("Why", "どうして").alternates(&["doushite"]),
        Question::new("Alone", "ひとりで").alternates(&["hitoride"]).kanji("一人で"),
        Question::new("Hello?", "もしもし").alternates(&["moshimoshi"]),
        Question::new("Right", "みぎ").alternates(&["migi"]).kanji("右"),
        Question::new("Left", "ひだり").alternates(&["hidari"]).kanji("左"),
        Question::new("Front", "まえ").alternates(&["mae"]).kanji("前"),
        Question::new("Back", "うしろ").alternates(&["ushiro"]).kanji("後ろ"),
        Question::new("Inside", "なか").alternates(&["naka"]).kanji("中"),
        Question::new("On", "うえ").alternates(&["ue"]).kanji("上"),
        Question::new("Under", "した").alternates(&["shita"]).kanji("下"),
        Question::new("Near/Nearby", "ちかく").alternates(&["chikaku"]).kanji("近く"),
        Question::new("Next", "となり").alternates(&["tonari"]).kanji("隣"),
        Question::new("Between", "あいだ").alternates(&["aida"]).kanji("間"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::{is_hiragana, is_katakana};

    #[test]
    fn kana_banks_cover_the_syllabary() {
        let hira = hiragana();
        let kata = katakana();
        assert_eq!(hira.len(), 71);
        assert_eq!(kata.len(), 71);
        assert!(hira.iter().all(|q| is_hiragana(&q.prompt)));
        assert!(kata.iter().all(|q| is_katakana(&q.prompt)));
    }

    #[test]
    fn vocab_banks_have_answers_for_every_entry() {
        for bank in [vocab_chapter1(), vocab_chapter3(), vocab_chapter4()] {
            assert!(!bank.is_empty());
            assert!(bank.iter().all(|q| !q.answer.is_empty()));
            assert!(bank.iter().all(|q| !q.prompt.is_empty()));
        }
    }

    #[test]
    fn kanji_bank_meanings_split_into_senses() {
        let bank = kanji();
        assert!(!bank.is_empty());
        for item in &bank {
            assert!(item.meaning.split('/').all(|s| !s.is_empty()));
            assert!(is_hiragana(&item.reading));
        }
    }

    #[test]
    fn romaji_alternates_are_accepted() {
        let bank = vocab_chapter1();
        let daigaku = bank.iter().find(|q| q.prompt.starts_with("College")).unwrap();
        assert!(daigaku.is_correct("daigaku"));
        assert!(daigaku.is_correct("大学"));
    }
}
