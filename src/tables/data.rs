//! Static vocabulary tables. Keys are the raw values seen in source payloads.

/// Race type (`raceType` API value) → label.
pub(crate) static RACE_TYPE: &[(&str, &str)] = &[
    ("full_marathon", "풀코스"),
    ("half_marathon", "하프"),
    ("ultra_marathon", "울트라"),
    ("ten_km", "10km"),
    ("five_km", "5km"),
    ("custom", "기타"),
];

/// Course surface → description.
pub(crate) static SURFACE: &[(&str, &str)] = &[
    ("Asphalt", "매끄러운 도로"),
    ("Road", "일반 도로"),
    ("Trail", "산길"),
    ("Terrain", "흙길"),
    ("Mixed", "섞여 있음"),
    ("Track", "우레탄 트랙"),
    ("Urban trail", "공원 산책로"),
    ("Sand", "모래길"),
    ("Snow", "눈길"),
    ("Indoor", "실내"),
    ("Grass", "잔디"),
    ("Gravel", "자갈길"),
    ("Other", "기타"),
];

/// Course difficulty → description.
pub(crate) static DIFFICULTY: &[(&str, &str)] = &[
    ("flat", "평평해요"),
    ("rolling", "조금 출렁여요"),
    ("undulating", "오르내림이 반복돼요"),
    ("hilly", "언덕이 많아요"),
    ("mountain", "험난한 산길"),
    ("extreme", "한계에 가까워요"),
];

/// Tag slugs with a natural translation; the rest pass through unchanged.
pub(crate) static TAG: &[(&str, &str)] = &[
    ("0-99-participants", "100명 미만"),
    ("100-999-participants", "100~999명"),
    ("1000-4999-participants", "1,000~4,999명"),
    ("5000-9999-participants", "5,000~9,999명"),
    ("10000-24999-participants", "1만~2만5천명"),
    ("25000-499999-participants", "2만5천명 이상"),
    ("50000-∞-participants", "5만명 이상"),
    ("city", "도시"),
    ("coastal", "해안"),
    ("countryside", "시골"),
    ("desert", "사막"),
    ("forest", "숲"),
    ("mountain", "산"),
    ("mountain-range", "산맥"),
    ("nature", "자연"),
    ("island", "섬"),
    ("jungle", "정글"),
    ("lake", "호수"),
    ("lakeside", "호숫가"),
    ("river", "강변"),
    ("valley", "계곡"),
    ("beach", "해변"),
    ("bay", "만"),
    ("sea", "바다"),
    ("ocean-view", "오션뷰"),
    ("park", "공원"),
    ("national-park", "국립공원"),
    ("state-park", "주립공원"),
    ("regional-park", "지역공원"),
    ("glacier", "빙하"),
    ("volcano", "화산"),
    ("canyon", "협곡"),
    ("cave", "동굴"),
    ("falls", "폭포"),
    ("waterfalls", "폭포"),
    ("pond", "연못"),
    ("bridge", "다리"),
    ("tunnel", "터널"),
    ("canal", "운하"),
    ("vineyards", "포도밭"),
    ("farms", "농장"),
    ("prairie", "초원"),
    ("savannah", "사바나"),
    ("rocks", "바위"),
    ("ice", "빙판"),
    ("snow", "눈"),
    ("sand", "모래"),
    ("grass", "잔디"),
    ("gravel", "자갈"),
    ("mud", "진흙"),
    ("polar", "극지"),
    ("lappland", "라플란드"),
    ("flat", "평탄"),
    ("hilly", "언덕"),
    ("downhill", "내리막"),
    ("scenic", "경치가 좋아요"),
    ("picturesque", "풍경이 그림이에요"),
    ("historic", "역사적"),
    ("historical", "역사적"),
    ("ancient", "고대"),
    ("castle", "성"),
    ("architecture", "건축"),
    ("urban", "도심"),
    ("rural", "시골"),
    ("residential", "주택가"),
    ("sub-urban", "교외"),
    ("road", "도로"),
    ("trail", "트레일"),
    ("urban-trail", "도심 트레일"),
    ("single-track", "싱글트랙"),
    ("asphalt", "아스팔트"),
    ("track", "트랙"),
    ("indoor", "실내"),
    ("closed-road", "폐쇄도로"),
    ("out-and-back", "왕복 코스"),
    ("point-to-point", "편도 코스"),
    ("single-loop", "단일 루프"),
    ("mulitple-loops", "복수 루프"),
    ("road_ahoutu", "도로로 달려요"),
    ("beginner-friendly", "초보자 편해요"),
    ("family-friendly", "가족같아요"),
    ("fast", "기록용"),
    ("night", "야간"),
    ("winter", "겨울"),
    ("spring", "봄"),
    ("new-year", "새해"),
    ("new-years", "새해"),
    ("sunset", "일몰"),
    ("charity", "자선"),
    ("fund-raising", "모금"),
    ("nonprofit", "비영리"),
    ("fun", "펀런"),
    ("adventure", "어드벤처"),
    ("extreme", "극한"),
    ("challenge", "챌린지"),
    ("relay", "릴레이"),
    ("virtual-run", "버추얼 런"),
    ("walk", "워킹"),
    ("obstacle", "장애물"),
    ("colour-run", "컬러런"),
    ("halloween", "할로윈"),
    ("beer", "맥주"),
    ("wine", "와인"),
    ("music", "음악"),
    ("entertainment", "엔터테인먼트"),
    ("amusement", "놀이"),
    ("amusement-park", "놀이공원"),
    ("zoo", "동물원"),
    ("sport", "스포츠"),
    ("kids", "어린이"),
    ("kids-run", "어린이 달리기"),
    ("youth-run", "청소년 달리기"),
    ("women-only", "여성 전용"),
    ("men-only", "남성 전용"),
    ("wheelchair-friendly", "휠체어도 가능해요"),
    ("eco-friendly", "친환경"),
    ("certified", "공인"),
    ("invitation-only", "초청 전용"),
    ("package-tour", "패키지 투어"),
    ("team", "팀"),
    ("teams", "팀"),
    ("military", "군사"),
    ("green", "친환경"),
    ("natural", "자연"),
    ("wild-life", "야생동물"),
    ("wildlife", "야생동물"),
    ("capital", "수도"),
    ("resort", "리조트"),
    ("airport", "공항"),
    ("stadium", "경기장"),
    ("motor-speedway", "서킷"),
    ("school", "학교"),
    ("sport-club", "스포츠클럽"),
    ("skating", "스케이팅"),
    ("skydiving", "스카이다이빙"),
    ("triathlon", "트라이애슬론"),
    ("marathon", "마라톤"),
    ("half-marathon", "하프마라톤"),
    ("ultra", "울트라"),
    ("run", "달리기"),
    ("trailrun", "트레일러닝"),
    ("road-running", "로드러닝"),
    ("boston-marathon-qualifier", "보스턴 마라톤 예선"),
    ("boston-qualifier", "보스턴 예선"),
    ("world-majors", "월드 메이저"),
    ("unesco", "유네스코"),
    ("unesco-world-heritage-site", "유네스코 세계유산"),
    ("aims-certified", "AIMS 공인"),
    ("aims-member", "AIMS 회원"),
    ("utmb-qualifier", "UTMB 예선"),
    ("world-athletics-label", "세계육상연맹 라벨"),
    ("world-athletics-gold-label", "세계육상연맹 골드라벨"),
    ("world-athletics-platinum-label", "세계육상연맹 플래티넘라벨"),
    ("world-athletics-elite-Label", "세계육상연맹 엘리트라벨"),
    ("olympic-games-qualifier", "올림픽 예선"),
    ("commonwealth-games-qualifier", "커먼웰스 게임 예선"),
];

/// English country name (as returned by the search API) → Korean name.
pub(crate) static COUNTRY: &[(&str, &str)] = &[
    ("Afghanistan", "아프가니스탄"),
    ("Albania", "알바니아"),
    ("Algeria", "알제리"),
    ("Andorra", "안도라"),
    ("Angola", "앙골라"),
    ("Antarctica", "남극"),
    ("Antigua and Barbuda", "앤티가 바부다"),
    ("Argentina", "아르헨티나"),
    ("Armenia", "아르메니아"),
    ("Aruba", "아루바"),
    ("Australia", "호주"),
    ("Austria", "오스트리아"),
    ("Azerbaijan", "아제르바이잔"),
    ("Bahamas", "바하마"),
    ("Bahrain", "바레인"),
    ("Bangladesh", "방글라데시"),
    ("Barbados", "바베이도스"),
    ("Belarus", "벨라루스"),
    ("Belgium", "벨기에"),
    ("Belize", "벨리즈"),
    ("Bermuda", "버뮤다"),
    ("Bhutan", "부탄"),
    ("Bolivia", "볼리비아"),
    ("Bosnia and Herzegovina", "보스니아 헤르체고비나"),
    ("Botswana", "보츠와나"),
    ("Brazil", "브라질"),
    ("Brunei", "브루나이"),
    ("Bulgaria", "불가리아"),
    ("Cabo Verde", "카보베르데"),
    ("Cambodia", "캄보디아"),
    ("Canada", "캐나다"),
    ("Cayman Islands", "케이맨 제도"),
    ("Chile", "칠레"),
    ("China", "중국"),
    ("Colombia", "콜롬비아"),
    ("Congo (Democratic Republic of the)", "콩고민주공화국"),
    ("Cook Islands", "쿡 제도"),
    ("Costa Rica", "코스타리카"),
    ("Croatia", "크로아티아"),
    ("Cuba", "쿠바"),
    ("Curaçao", "퀴라소"),
    ("Cyprus", "키프로스"),
    ("Czech Republic", "체코"),
    ("Côte d'Ivoire", "코트디부아르"),
    ("Denmark", "덴마크"),
    ("Dominican Republic", "도미니카 공화국"),
    ("Ecuador", "에콰도르"),
    ("Egypt", "이집트"),
    ("Estonia", "에스토니아"),
    ("Ethiopia", "에티오피아"),
    ("Falkland Islands (Malvinas)", "포클랜드 제도"),
    ("Faroe Islands", "페로 제도"),
    ("Fiji", "피지"),
    ("Finland", "핀란드"),
    ("France", "프랑스"),
    ("French Polynesia", "프랑스령 폴리네시아"),
    ("Gabon", "가봉"),
    ("Gambia", "감비아"),
    ("Georgia", "조지아"),
    ("Germany", "독일"),
    ("Ghana", "가나"),
    ("Gibraltar", "지브롤터"),
    ("Greece", "그리스"),
    ("Greenland", "그린란드"),
    ("Guam", "괌"),
    ("Guatemala", "과테말라"),
    ("Holy See", "바티칸"),
    ("Hong Kong", "홍콩"),
    ("Hungary", "헝가리"),
    ("Iceland", "아이슬란드"),
    ("India", "인도"),
    ("Indonesia", "인도네시아"),
    ("Iran", "이란"),
    ("Ireland", "아일랜드"),
    ("Isle of Man", "맨섬"),
    ("Israel", "이스라엘"),
    ("Italy", "이탈리아"),
    ("Jamaica", "자메이카"),
    ("Japan", "일본"),
    ("Jersey", "저지"),
    ("Jordan", "요르단"),
    ("Kazakhstan", "카자흐스탄"),
    ("Kenya", "케냐"),
    ("Kuwait", "쿠웨이트"),
    ("Kyrgyzstan", "키르기스스탄"),
    ("Lao People's Democratic Republic", "라오스"),
    ("Latvia", "라트비아"),
    ("Lebanon", "레바논"),
    ("Liberia", "라이베리아"),
    ("Liechtenstein", "리히텐슈타인"),
    ("Lithuania", "리투아니아"),
    ("Luxembourg", "룩셈부르크"),
    ("Macao", "마카오"),
    ("Madagascar", "마다가스카르"),
    ("Malawi", "말라위"),
    ("Malaysia", "말레이시아"),
    ("Maldives", "몰디브"),
    ("Malta", "몰타"),
    ("Martinique", "마르티니크"),
    ("Mauritius", "모리셔스"),
    ("Mexico", "멕시코"),
    ("Moldova (Republic of)", "몰도바"),
    ("Mongolia", "몽골"),
    ("Montenegro", "몬테네그로"),
    ("Morocco", "모로코"),
    ("Mozambique", "모잠비크"),
    ("Myanmar", "미얀마"),
    ("Namibia", "나미비아"),
    ("Nepal", "네팔"),
    ("Netherlands", "네덜란드"),
    ("New Zealand", "뉴질랜드"),
    ("Niger", "니제르"),
    ("Nigeria", "나이지리아"),
    ("North Korea", "북한"),
    ("North Macedonia", "북마케도니아"),
    ("Northern Mariana Islands", "북마리아나 제도"),
    ("Norway", "노르웨이"),
    ("Oman", "오만"),
    ("Pakistan", "파키스탄"),
    ("Panama", "파나마"),
    ("Paraguay", "파라과이"),
    ("Peru", "페루"),
    ("Philippines", "필리핀"),
    ("Poland", "폴란드"),
    ("Portugal", "포르투갈"),
    ("Puerto Rico", "푸에르토리코"),
    ("Qatar", "카타르"),
    ("Romania", "루마니아"),
    ("Russia", "러시아"),
    ("Rwanda", "르완다"),
    ("Réunion", "레위니옹"),
    ("Samoa", "사모아"),
    ("Sao Tome and Principe", "상투메 프린시페"),
    ("Saudi Arabia", "사우디아라비아"),
    ("Senegal", "세네갈"),
    ("Serbia", "세르비아"),
    ("Seychelles", "세이셸"),
    ("Sierra Leone", "시에라리온"),
    ("Singapore", "싱가포르"),
    ("Slovakia", "슬로바키아"),
    ("Slovenia", "슬로베니아"),
    ("Somalia", "소말리아"),
    ("South Africa", "남아프리카공화국"),
    ("South Korea", "대한민국"),
    ("Spain", "스페인"),
    ("Sri Lanka", "스리랑카"),
    ("Sweden", "스웨덴"),
    ("Switzerland", "스위스"),
    ("Syrian Arab Republic", "시리아"),
    ("Taiwan", "대만"),
    ("Tajikistan", "타지키스탄"),
    ("Tanzania", "탄자니아"),
    ("Thailand", "태국"),
    ("Togo", "토고"),
    ("Trinidad and Tobago", "트리니다드 토바고"),
    ("Tunisia", "튀니지"),
    ("Turkey", "튀르키예"),
    ("Turks and Caicos Islands", "터크스 케이커스 제도"),
    ("Uganda", "우간다"),
    ("Ukraine", "우크라이나"),
    ("United Arab Emirates", "아랍에미리트"),
    ("United Kingdom", "영국"),
    ("United States of America", "미국"),
    ("Uruguay", "우루과이"),
    ("Uzbekistan", "우즈베키스탄"),
    ("Vanuatu", "바누아투"),
    ("Vietnam", "베트남"),
    ("Virgin Islands (British)", "영국령 버진아일랜드"),
    ("Virgin Islands (U.S.)", "미국령 버진아일랜드"),
    ("Zambia", "잠비아"),
    ("Zimbabwe", "짐바브웨"),
    ("Åland Islands", "올란드 제도"),
];

/// English country name → Korean continent name.
pub(crate) static CONTINENT: &[(&str, &str)] = &[
    ("Afghanistan", "아시아"),
    ("Azerbaijan", "아시아"),
    ("Bahrain", "아시아"),
    ("Bangladesh", "아시아"),
    ("Bhutan", "아시아"),
    ("Brunei", "아시아"),
    ("Cambodia", "아시아"),
    ("China", "아시아"),
    ("Georgia", "아시아"),
    ("Hong Kong", "아시아"),
    ("India", "아시아"),
    ("Indonesia", "아시아"),
    ("Iran", "아시아"),
    ("Israel", "아시아"),
    ("Japan", "아시아"),
    ("Jordan", "아시아"),
    ("Kazakhstan", "아시아"),
    ("Kuwait", "아시아"),
    ("Kyrgyzstan", "아시아"),
    ("Lao People's Democratic Republic", "아시아"),
    ("Lebanon", "아시아"),
    ("Macao", "아시아"),
    ("Malaysia", "아시아"),
    ("Maldives", "아시아"),
    ("Mongolia", "아시아"),
    ("Myanmar", "아시아"),
    ("Nepal", "아시아"),
    ("North Korea", "아시아"),
    ("Oman", "아시아"),
    ("Pakistan", "아시아"),
    ("Philippines", "아시아"),
    ("Qatar", "아시아"),
    ("Saudi Arabia", "아시아"),
    ("Singapore", "아시아"),
    ("South Korea", "아시아"),
    ("Sri Lanka", "아시아"),
    ("Syrian Arab Republic", "아시아"),
    ("Taiwan", "아시아"),
    ("Tajikistan", "아시아"),
    ("Thailand", "아시아"),
    ("Turkey", "아시아"),
    ("United Arab Emirates", "아시아"),
    ("Uzbekistan", "아시아"),
    ("Vietnam", "아시아"),
    ("Albania", "유럽"),
    ("Andorra", "유럽"),
    ("Armenia", "유럽"),
    ("Austria", "유럽"),
    ("Belarus", "유럽"),
    ("Belgium", "유럽"),
    ("Bosnia and Herzegovina", "유럽"),
    ("Bulgaria", "유럽"),
    ("Croatia", "유럽"),
    ("Cyprus", "유럽"),
    ("Czech Republic", "유럽"),
    ("Denmark", "유럽"),
    ("Estonia", "유럽"),
    ("Faroe Islands", "유럽"),
    ("Finland", "유럽"),
    ("France", "유럽"),
    ("Germany", "유럽"),
    ("Gibraltar", "유럽"),
    ("Greece", "유럽"),
    ("Holy See", "유럽"),
    ("Hungary", "유럽"),
    ("Iceland", "유럽"),
    ("Ireland", "유럽"),
    ("Isle of Man", "유럽"),
    ("Italy", "유럽"),
    ("Jersey", "유럽"),
    ("Latvia", "유럽"),
    ("Liechtenstein", "유럽"),
    ("Lithuania", "유럽"),
    ("Luxembourg", "유럽"),
    ("Malta", "유럽"),
    ("Moldova (Republic of)", "유럽"),
    ("Montenegro", "유럽"),
    ("Netherlands", "유럽"),
    ("North Macedonia", "유럽"),
    ("Norway", "유럽"),
    ("Poland", "유럽"),
    ("Portugal", "유럽"),
    ("Romania", "유럽"),
    ("Russia", "유럽"),
    ("Serbia", "유럽"),
    ("Slovakia", "유럽"),
    ("Slovenia", "유럽"),
    ("Spain", "유럽"),
    ("Sweden", "유럽"),
    ("Switzerland", "유럽"),
    ("Ukraine", "유럽"),
    ("United Kingdom", "유럽"),
    ("Åland Islands", "유럽"),
    ("Aruba", "북미"),
    ("Bahamas", "북미"),
    ("Barbados", "북미"),
    ("Belize", "북미"),
    ("Bermuda", "북미"),
    ("Canada", "북미"),
    ("Cayman Islands", "북미"),
    ("Costa Rica", "북미"),
    ("Cuba", "북미"),
    ("Curaçao", "북미"),
    ("Dominican Republic", "북미"),
    ("Guatemala", "북미"),
    ("Jamaica", "북미"),
    ("Martinique", "북미"),
    ("Mexico", "북미"),
    ("Panama", "북미"),
    ("Puerto Rico", "북미"),
    ("Trinidad and Tobago", "북미"),
    ("Turks and Caicos Islands", "북미"),
    ("United States of America", "북미"),
    ("Virgin Islands (British)", "북미"),
    ("Virgin Islands (U.S.)", "북미"),
    ("Antigua and Barbuda", "북미"),
    ("Greenland", "북미"),
    ("Guam", "북미"),
    ("Northern Mariana Islands", "북미"),
    ("Argentina", "남미"),
    ("Bolivia", "남미"),
    ("Brazil", "남미"),
    ("Chile", "남미"),
    ("Colombia", "남미"),
    ("Ecuador", "남미"),
    ("Paraguay", "남미"),
    ("Peru", "남미"),
    ("Uruguay", "남미"),
    ("Algeria", "아프리카"),
    ("Angola", "아프리카"),
    ("Botswana", "아프리카"),
    ("Cabo Verde", "아프리카"),
    ("Côte d'Ivoire", "아프리카"),
    ("Egypt", "아프리카"),
    ("Ethiopia", "아프리카"),
    ("Gabon", "아프리카"),
    ("Gambia", "아프리카"),
    ("Ghana", "아프리카"),
    ("Kenya", "아프리카"),
    ("Liberia", "아프리카"),
    ("Madagascar", "아프리카"),
    ("Malawi", "아프리카"),
    ("Mauritius", "아프리카"),
    ("Morocco", "아프리카"),
    ("Mozambique", "아프리카"),
    ("Namibia", "아프리카"),
    ("Niger", "아프리카"),
    ("Nigeria", "아프리카"),
    ("Rwanda", "아프리카"),
    ("Réunion", "아프리카"),
    ("Sao Tome and Principe", "아프리카"),
    ("Senegal", "아프리카"),
    ("Seychelles", "아프리카"),
    ("Sierra Leone", "아프리카"),
    ("Somalia", "아프리카"),
    ("South Africa", "아프리카"),
    ("Tanzania", "아프리카"),
    ("Togo", "아프리카"),
    ("Tunisia", "아프리카"),
    ("Uganda", "아프리카"),
    ("Zambia", "아프리카"),
    ("Zimbabwe", "아프리카"),
    ("Congo (Democratic Republic of the)", "아프리카"),
    ("Australia", "오세아니아"),
    ("Cook Islands", "오세아니아"),
    ("Fiji", "오세아니아"),
    ("French Polynesia", "오세아니아"),
    ("New Zealand", "오세아니아"),
    ("Samoa", "오세아니아"),
    ("Vanuatu", "오세아니아"),
    ("Antarctica", "남극"),
    ("Falkland Islands (Malvinas)", "남미"),
];

/// Well-known marathon host cities. Anything missing goes through the remote translator.
pub(crate) static CITY: &[(&str, &str)] = &[
    ("New York", "뉴욕"),
    ("Los Angeles", "로스앤젤레스"),
    ("Chicago", "시카고"),
    ("Houston", "휴스턴"),
    ("Phoenix", "피닉스"),
    ("Philadelphia", "필라델피아"),
    ("San Antonio", "샌안토니오"),
    ("San Diego", "샌디에이고"),
    ("Dallas", "댈러스"),
    ("San Jose", "산호세"),
    ("Austin", "오스틴"),
    ("Jacksonville", "잭슨빌"),
    ("San Francisco", "샌프란시스코"),
    ("Columbus", "콜럼버스"),
    ("Indianapolis", "인디애나폴리스"),
    ("Fort Worth", "포트워스"),
    ("Charlotte", "샬럿"),
    ("Seattle", "시애틀"),
    ("Denver", "덴버"),
    ("Washington", "워싱턴"),
    ("Boston", "보스턴"),
    ("Nashville", "내슈빌"),
    ("Detroit", "디트로이트"),
    ("Portland", "포틀랜드"),
    ("Las Vegas", "라스베이거스"),
    ("Memphis", "멤피스"),
    ("Louisville", "루이빌"),
    ("Baltimore", "볼티모어"),
    ("Milwaukee", "밀워키"),
    ("Albuquerque", "앨버커키"),
    ("Tucson", "투손"),
    ("Fresno", "프레즈노"),
    ("Sacramento", "새크라멘토"),
    ("Kansas City", "캔자스시티"),
    ("Atlanta", "애틀랜타"),
    ("Miami", "마이애미"),
    ("Raleigh", "롤리"),
    ("Minneapolis", "미니애폴리스"),
    ("Omaha", "오마하"),
    ("Cleveland", "클리블랜드"),
    ("New Orleans", "뉴올리언스"),
    ("Tampa", "탬파"),
    ("Honolulu", "호놀룰루"),
    ("Pittsburgh", "피츠버그"),
    ("Cincinnati", "신시내티"),
    ("Orlando", "올랜도"),
    ("St. Louis", "세인트루이스"),
    ("Richmond", "리치먼드"),
    ("Buffalo", "버펄로"),
    ("Salt Lake City", "솔트레이크시티"),
    ("Toronto", "토론토"),
    ("Montreal", "몬트리올"),
    ("Vancouver", "밴쿠버"),
    ("Calgary", "캘거리"),
    ("Edmonton", "에드먼턴"),
    ("Ottawa", "오타와"),
    ("Quebec", "퀘벡"),
    ("Winnipeg", "위니펙"),
    ("Hamilton", "해밀턴"),
    ("Victoria", "빅토리아"),
    ("Halifax", "핼리팩스"),
    ("London", "런던"),
    ("Manchester", "맨체스터"),
    ("Birmingham", "버밍엄"),
    ("Leeds", "리즈"),
    ("Glasgow", "글래스고"),
    ("Edinburgh", "에딘버러"),
    ("Liverpool", "리버풀"),
    ("Bristol", "브리스톨"),
    ("Sheffield", "셰필드"),
    ("Newcastle", "뉴캐슬"),
    ("Belfast", "벨파스트"),
    ("Cardiff", "카디프"),
    ("Leicester", "레스터"),
    ("Nottingham", "노팅엄"),
    ("Southampton", "사우샘프턴"),
    ("Brighton", "브라이튼"),
    ("Oxford", "옥스퍼드"),
    ("Cambridge", "케임브리지"),
    ("York", "요크"),
    ("Bath", "바스"),
    ("Bradford", "브래드퍼드"),
    ("Coventry", "코번트리"),
    ("Hull", "헐"),
    ("Plymouth", "플리머스"),
    ("Reading", "레딩"),
    ("Canterbury", "캔터베리"),
    ("Winchester", "윈체스터"),
    ("Chester", "체스터"),
    ("Derby", "더비"),
    ("Exeter", "엑서터"),
    ("Portsmouth", "포츠머스"),
    ("Norwich", "노리치"),
    ("Durham", "더럼"),
    ("Windsor", "윈저"),
    ("Eastbourne", "이스트본"),
    ("Bournemouth", "본머스"),
    ("Worthing", "워딩"),
    ("Northampton", "노샘프턴"),
    ("Paris", "파리"),
    ("Marseille", "마르세유"),
    ("Lyon", "리옹"),
    ("Toulouse", "툴루즈"),
    ("Nice", "니스"),
    ("Nantes", "낭트"),
    ("Strasbourg", "스트라스부르"),
    ("Montpellier", "몽펠리에"),
    ("Bordeaux", "보르도"),
    ("Lille", "릴"),
    ("Rennes", "렌"),
    ("Reims", "랭스"),
    ("Le Havre", "르아브르"),
    ("Saint-Étienne", "생테티엔"),
    ("Toulon", "툴롱"),
    ("Grenoble", "그르노블"),
    ("Dijon", "디종"),
    ("Angers", "앙제"),
    ("Nîmes", "님"),
    ("Aix-en-Provence", "엑상프로방스"),
    ("Cannes", "칸"),
    ("Brest", "브레스트"),
    ("Tours", "투르"),
    ("Amiens", "아미앵"),
    ("Berlin", "베를린"),
    ("Hamburg", "함부르크"),
    ("Munich", "뮌헨"),
    ("Cologne", "쾰른"),
    ("Frankfurt", "프랑크푸르트"),
    ("Stuttgart", "슈투트가르트"),
    ("Düsseldorf", "뒤셀도르프"),
    ("Dortmund", "도르트문트"),
    ("Essen", "에센"),
    ("Leipzig", "라이프치히"),
    ("Bremen", "브레멘"),
    ("Dresden", "드레스덴"),
    ("Hanover", "하노버"),
    ("Nuremberg", "뉘른베르크"),
    ("Duisburg", "뒤스부르크"),
    ("Bochum", "보훔"),
    ("Wuppertal", "부퍼탈"),
    ("Bonn", "본"),
    ("Bielefeld", "빌레펠트"),
    ("Mannheim", "만하임"),
    ("Karlsruhe", "카를스루에"),
    ("Münster", "뮌스터"),
    ("Augsburg", "아우크스부르크"),
    ("Madrid", "마드리드"),
    ("Barcelona", "바르셀로나"),
    ("Valencia", "발렌시아"),
    ("Seville", "세비야"),
    ("Zaragoza", "사라고사"),
    ("Málaga", "말라가"),
    ("Murcia", "무르시아"),
    ("Palma", "팔마"),
    ("Las Palmas", "라스팔마스"),
    ("Bilbao", "빌바오"),
    ("Alicante", "알리칸테"),
    ("Córdoba", "코르도바"),
    ("Valladolid", "바야돌리드"),
    ("Vigo", "비고"),
    ("Gijón", "히혼"),
    ("Granada", "그라나다"),
    ("San Sebastián", "산세바스티안"),
    ("Rome", "로마"),
    ("Milan", "밀라노"),
    ("Naples", "나폴리"),
    ("Turin", "토리노"),
    ("Palermo", "팔레르모"),
    ("Genoa", "제노바"),
    ("Bologna", "볼로냐"),
    ("Florence", "피렌체"),
    ("Bari", "바리"),
    ("Catania", "카타니아"),
    ("Venice", "베네치아"),
    ("Verona", "베로나"),
    ("Messina", "메시나"),
    ("Padua", "파도바"),
    ("Trieste", "트리에스테"),
    ("Brescia", "브레시아"),
    ("Parma", "파르마"),
    ("Pisa", "피사"),
    ("Modena", "모데나"),
    ("Rimini", "리미니"),
    ("Ravenna", "라벤나"),
    ("Amsterdam", "암스테르담"),
    ("Rotterdam", "로테르담"),
    ("The Hague", "헤이그"),
    ("Utrecht", "위트레흐트"),
    ("Eindhoven", "에인트호번"),
    ("Tilburg", "틸뷔르흐"),
    ("Groningen", "흐로닝언"),
    ("Almere", "알메르"),
    ("Breda", "브레다"),
    ("Nijmegen", "네이메헌"),
    ("Maastricht", "마스트리흐트"),
    ("Brussels", "브뤼셀"),
    ("Antwerp", "앤트워프"),
    ("Ghent", "겐트"),
    ("Charleroi", "샤를루아"),
    ("Liège", "리에주"),
    ("Bruges", "브뤼헤"),
    ("Namur", "나뮈르"),
    ("Leuven", "뢰번"),
    ("Zurich", "취리히"),
    ("Geneva", "제네바"),
    ("Basel", "바젤"),
    ("Bern", "베른"),
    ("Lausanne", "로잔"),
    ("Lucerne", "루체른"),
    ("Interlaken", "인터라켄"),
    ("St. Moritz", "생모리츠"),
    ("Vienna", "빈"),
    ("Graz", "그라츠"),
    ("Linz", "린츠"),
    ("Salzburg", "잘츠부르크"),
    ("Innsbruck", "인스브루크"),
    ("Stockholm", "스톡홀름"),
    ("Gothenburg", "예테보리"),
    ("Malmö", "말뫼"),
    ("Copenhagen", "코펜하겐"),
    ("Oslo", "오슬로"),
    ("Bergen", "베르겐"),
    ("Helsinki", "헬싱키"),
    ("Tampere", "탐페레"),
    ("Turku", "투르쿠"),
    ("Tallinn", "탈린"),
    ("Reykjavik", "레이캬비크"),
    ("Warsaw", "바르샤바"),
    ("Kraków", "크라쿠프"),
    ("Prague", "프라하"),
    ("Budapest", "부다페스트"),
    ("Bucharest", "부쿠레슈티"),
    ("Sofia", "소피아"),
    ("Belgrade", "베오그라드"),
    ("Zagreb", "자그레브"),
    ("Bratislava", "브라티슬라바"),
    ("Ljubljana", "류블랴나"),
    ("Vilnius", "빌뉴스"),
    ("Riga", "리가"),
    ("Kiev", "키예프"),
    ("Moscow", "모스크바"),
    ("St. Petersburg", "상트페테르부르크"),
    ("Athens", "아테네"),
    ("Thessaloniki", "테살로니키"),
    ("Istanbul", "이스탄불"),
    ("İstanbul", "이스탄불"),
    ("Ankara", "앙카라"),
    ("Izmir", "이즈미르"),
    ("Tokyo", "도쿄"),
    ("Osaka", "오사카"),
    ("Kyoto", "교토"),
    ("Yokohama", "요코하마"),
    ("Nagoya", "나고야"),
    ("Sapporo", "삿포로"),
    ("Fukuoka", "후쿠오카"),
    ("Kobe", "고베"),
    ("Hiroshima", "히로시마"),
    ("Sendai", "센다이"),
    ("Nara", "나라"),
    ("Okinawa", "오키나와"),
    ("Seoul", "서울"),
    ("Busan", "부산"),
    ("Incheon", "인천"),
    ("Daegu", "대구"),
    ("Daejeon", "대전"),
    ("Gwangju", "광주"),
    ("Beijing", "베이징"),
    ("Shanghai", "상하이"),
    ("Guangzhou", "광저우"),
    ("Shenzhen", "선전"),
    ("Chengdu", "청두"),
    ("Hong Kong", "홍콩"),
    ("Taipei", "타이베이"),
    ("Singapore", "싱가포르"),
    ("Bangkok", "방콕"),
    ("Kuala Lumpur", "쿠알라룸푸르"),
    ("Manila", "마닐라"),
    ("Jakarta", "자카르타"),
    ("Hanoi", "하노이"),
    ("Ho Chi Minh", "호치민"),
    ("Phnom Penh", "프놈펜"),
    ("New Delhi", "뉴델리"),
    ("Mumbai", "뭄바이"),
    ("Bangalore", "방갈로르"),
    ("Kolkata", "콜카타"),
    ("Chennai", "첸나이"),
    ("Hyderabad", "하이데라바드"),
    ("Kathmandu", "카트만두"),
    ("Pokhara", "포카라"),
    ("Colombo", "콜롬보"),
    ("Dhaka", "다카"),
    ("Karachi", "카라치"),
    ("Islamabad", "이슬라마바드"),
    ("Dubai", "두바이"),
    ("Abu Dhabi", "아부다비"),
    ("Doha", "도하"),
    ("Riyadh", "리야드"),
    ("Jeddah", "제다"),
    ("Amman", "암만"),
    ("Beirut", "베이루트"),
    ("Jerusalem", "예루살렘"),
    ("Tel Aviv", "텔아비브"),
    ("Sydney", "시드니"),
    ("Melbourne", "멜버른"),
    ("Brisbane", "브리즈번"),
    ("Perth", "퍼스"),
    ("Adelaide", "애들레이드"),
    ("Canberra", "캔버라"),
    ("Gold Coast", "골드코스트"),
    ("Auckland", "오클랜드"),
    ("Wellington", "웰링턴"),
    ("Christchurch", "크라이스트처치"),
    ("Queenstown", "퀸스타운"),
    ("Buenos Aires", "부에노스아이레스"),
    ("São Paulo", "상파울루"),
    ("Rio de Janeiro", "리우데자네이루"),
    ("Brasília", "브라질리아"),
    ("Lima", "리마"),
    ("Bogotá", "보고타"),
    ("Santiago", "산티아고"),
    ("Caracas", "카라카스"),
    ("Quito", "키토"),
    ("Montevideo", "몬테비데오"),
    ("Asunción", "아순시온"),
    ("La Paz", "라파스"),
    ("Cairo", "카이로"),
    ("Cape Town", "케이프타운"),
    ("Johannesburg", "요하네스버그"),
    ("Nairobi", "나이로비"),
    ("Lagos", "라고스"),
    ("Kinshasa", "킨샤사"),
    ("Casablanca", "카사블랑카"),
    ("Marrakech", "마라케시"),
    ("Tunis", "튀니스"),
    ("Addis Ababa", "아디스아바바"),
    ("Dar es Salaam", "다르에스살람"),
    ("Mexico City", "멕시코시티"),
    ("Guadalajara", "과달라하라"),
    ("Monterrey", "몬테레이"),
    ("Cancún", "칸쿤"),
    ("Tijuana", "티후아나"),
    ("Puebla", "푸에블라"),
];
