// hanzi-pinyin/src/dict_data.rs
//
// Character readings table, generated from the pinyin-data project
// (https://github.com/mozillazg/pinyin-data). Do not edit by hand.
//
// Keys are single hanzi, values are comma-separated readings in the
// diacritic alphabet, most common reading first.

use phf::phf_map;

pub(crate) static DICT: phf::Map<char, &'static str> = phf_map! {
    '一' => "yī", // U+4E00
    '七' => "qī", // U+4E03
    '万' => "wàn,mò", // U+4E07
    '三' => "sān", // U+4E09
    '上' => "shàng,shǎng", // U+4E0A
    '下' => "xià", // U+4E0B
    '不' => "bù,fǒu", // U+4E0D
    '与' => "yǔ,yù", // U+4E0E
    '且' => "qiě,jū", // U+4E14
    '世' => "shì", // U+4E16
    '业' => "yè", // U+4E1A
    '东' => "dōng", // U+4E1C
    '中' => "zhōng,zhòng", // U+4E2D
    '为' => "wéi,wèi", // U+4E3A
    '主' => "zhǔ", // U+4E3B
    '丽' => "lì,lí", // U+4E3D
    '么' => "me,mó", // U+4E48
    '义' => "yì", // U+4E49
    '乐' => "lè,yuè", // U+4E50
    '九' => "jiǔ", // U+4E5D
    '也' => "yě", // U+4E5F
    '习' => "xí", // U+4E60
    '书' => "shū", // U+4E66
    '买' => "mǎi", // U+4E70
    '了' => "le,liǎo", // U+4E86
    '争' => "zhēng", // U+4E89
    '事' => "shì", // U+4E8B
    '二' => "èr", // U+4E8C
    '于' => "yú", // U+4E8E
    '云' => "yún", // U+4E91
    '五' => "wǔ", // U+4E94
    '些' => "xiē", // U+4E9B
    '京' => "jīng", // U+4EAC
    '亲' => "qīn,qìng", // U+4EB2
    '人' => "rén", // U+4EBA
    '什' => "shén,shí", // U+4EC0
    '今' => "jīn", // U+4ECA
    '从' => "cóng,zòng", // U+4ECE
    '他' => "tā", // U+4ED6
    '以' => "yǐ", // U+4EE5
    '们' => "men", // U+4EEC
    '价' => "jià,jiè", // U+4EF7
    '会' => "huì,kuài", // U+4F1A
    '伟' => "wěi", // U+4F1F
    '但' => "dàn", // U+4F46
    '位' => "wèi", // U+4F4D
    '低' => "dī", // U+4F4E
    '体' => "tǐ,tī", // U+4F53
    '作' => "zuò,zuō", // U+4F5C
    '你' => "nǐ", // U+4F60
    '侵' => "qīn", // U+4FB5
    '便' => "biàn,pián", // U+4FBF
    '俄' => "é", // U+4FC4
    '信' => "xìn", // U+4FE1
    '假' => "jiǎ,jià", // U+5047
    '做' => "zuò", // U+505A
    '停' => "tíng", // U+505C
    '儿' => "ér", // U+513F
    '元' => "yuán", // U+5143
    '光' => "guāng", // U+5149
    '兔' => "tù", // U+5154
    '全' => "quán", // U+5168
    '八' => "bā", // U+516B
    '公' => "gōng", // U+516C
    '六' => "liù,lù", // U+516D
    '关' => "guān", // U+5173
    '兵' => "bīng", // U+5175
    '其' => "qí,jī", // U+5176
    '具' => "jù", // U+5177
    '内' => "nèi,nà", // U+5185
    '再' => "zài", // U+518D
    '写' => "xiě", // U+5199
    '军' => "jūn", // U+519B
    '冬' => "dōng", // U+51AC
    '冷' => "lěng", // U+51B7
    '几' => "jǐ,jī", // U+51E0
    '出' => "chū", // U+51FA
    '分' => "fēn,fèn", // U+5206
    '则' => "zé", // U+5219
    '利' => "lì", // U+5229
    '别' => "bié,biè", // U+522B
    '到' => "dào", // U+5230
    '前' => "qián", // U+524D
    '力' => "lì", // U+529B
    '办' => "bàn", // U+529E
    '务' => "wù", // U+52A1
    '动' => "dòng", // U+52A8
    '勇' => "yǒng", // U+52C7
    '北' => "běi,bèi", // U+5317
    '十' => "shí", // U+5341
    '千' => "qiān", // U+5343
    '午' => "wǔ", // U+5348
    '华' => "huá,huà", // U+534E
    '单' => "dān,shàn,chán", // U+5355
    '卖' => "mài", // U+5356
    '南' => "nán,nā", // U+5357
    '即' => "jí", // U+5373
    '厂' => "chǎng", // U+5382
    '原' => "yuán", // U+539F
    '去' => "qù", // U+53BB
    '县' => "xiàn", // U+53BF
    '又' => "yòu", // U+53C8
    '友' => "yǒu", // U+53CB
    '反' => "fǎn", // U+53CD
    '发' => "fā,fà", // U+53D1
    '取' => "qǔ", // U+53D6
    '变' => "biàn", // U+53D8
    '口' => "kǒu", // U+53E3
    '句' => "jù,gōu", // U+53E5
    '另' => "lìng", // U+53E6
    '只' => "zhǐ,zhī", // U+53EA
    '叫' => "jiào", // U+53EB
    '可' => "kě,kè", // U+53EF
    '台' => "tái", // U+53F0
    '右' => "yòu", // U+53F3
    '叶' => "yè,xié", // U+53F6
    '号' => "hào,háo", // U+53F7
    '司' => "sī", // U+53F8
    '吃' => "chī", // U+5403
    '各' => "gè,gě", // U+5404
    '名' => "míng", // U+540D
    '后' => "hòu", // U+540E
    '向' => "xiàng", // U+5411
    '吕' => "lǚ", // U+5415
    '吗' => "ma,mǎ", // U+5417
    '吧' => "ba,bā", // U+5427
    '听' => "tīng", // U+542C
    '呀' => "ya,yā", // U+5440
    '呢' => "ne,ní", // U+5462
    '呣' => "ḿ", // U+5463
    '周' => "zhōu", // U+5468
    '味' => "wèi", // U+5473
    '呼' => "hū", // U+547C
    '和' => "hé,hè,huó,huò,hú", // U+548C
    '品' => "pǐn", // U+54C1
    '哈' => "hā,hǎ", // U+54C8
    '哥' => "gē", // U+54E5
    '哦' => "ó,ò,é", // U+54E6
    '哪' => "nǎ,na", // U+54EA
    '哭' => "kū", // U+54ED
    '商' => "shāng", // U+5546
    '啊' => "a,ā,á,ǎ,à", // U+554A
    '啦' => "la,lā", // U+5566
    '喜' => "xǐ", // U+559C
    '喝' => "hē,hè", // U+559D
    '嗯' => "ń,ň,ǹ", // U+55EF
    '器' => "qì", // U+5668
    '四' => "sì", // U+56DB
    '回' => "huí", // U+56DE
    '因' => "yīn", // U+56E0
    '园' => "yuán", // U+56ED
    '围' => "wéi", // U+56F4
    '国' => "guó", // U+56FD
    '圆' => "yuán", // U+5706
    '土' => "tǔ", // U+571F
    '在' => "zài", // U+5728
    '地' => "dì,de", // U+5730
    '场' => "chǎng,cháng", // U+573A
    '坏' => "huài", // U+574F
    '坐' => "zuò", // U+5750
    '城' => "chéng", // U+57CE
    '域' => "yù", // U+57DF
    '墨' => "mò", // U+58A8
    '声' => "shēng", // U+58F0
    '处' => "chù,chǔ", // U+5904
    '夏' => "xià", // U+590F
    '外' => "wài", // U+5916
    '多' => "duō", // U+591A
    '大' => "dà,dài", // U+5927
    '天' => "tiān", // U+5929
    '太' => "tài", // U+592A
    '头' => "tóu", // U+5934
    '女' => "nǚ,rǔ", // U+5973
    '她' => "tā", // U+5979
    '好' => "hǎo,hào", // U+597D
    '如' => "rú", // U+5982
    '妈' => "mā", // U+5988
    '妹' => "mèi", // U+59B9
    '姐' => "jiě", // U+59D0
    '姓' => "xìng", // U+59D3
    '委' => "wěi,wēi", // U+59D4
    '子' => "zǐ,zi", // U+5B50
    '字' => "zì", // U+5B57
    '孙' => "sūn,xùn", // U+5B59
    '学' => "xué", // U+5B66
    '它' => "tā", // U+5B83
    '安' => "ān", // U+5B89
    '定' => "dìng", // U+5B9A
    '宜' => "yí", // U+5B9C
    '客' => "kè", // U+5BA2
    '家' => "jiā,jia", // U+5BB6
    '对' => "duì", // U+5BF9
    '将' => "jiāng,jiàng", // U+5C06
    '小' => "xiǎo", // U+5C0F
    '少' => "shǎo,shào", // U+5C11
    '就' => "jiù", // U+5C31
    '屋' => "wū", // U+5C4B
    '山' => "shān", // U+5C71
    '岛' => "dǎo", // U+5C9B
    '工' => "gōng", // U+5DE5
    '左' => "zuǒ", // U+5DE6
    '己' => "jǐ", // U+5DF1
    '巴' => "bā", // U+5DF4
    '市' => "shì", // U+5E02
    '师' => "shī", // U+5E08
    '希' => "xī", // U+5E0C
    '带' => "dài", // U+5E26
    '干' => "gān,gàn", // U+5E72
    '平' => "píng", // U+5E73
    '年' => "nián", // U+5E74
    '庆' => "qìng", // U+5E86
    '床' => "chuáng", // U+5E8A
    '应' => "yīng,yìng", // U+5E94
    '店' => "diàn", // U+5E97
    '府' => "fǔ", // U+5E9C
    '开' => "kāi", // U+5F00
    '弟' => "dì,tì", // U+5F1F
    '影' => "yǐng", // U+5F71
    '彼' => "bǐ", // U+5F7C
    '很' => "hěn", // U+5F88
    '律' => "lǜ", // U+5F8B
    '徐' => "xú", // U+5F90
    '德' => "dé", // U+5FB7
    '心' => "xīn", // U+5FC3
    '必' => "bì", // U+5FC5
    '志' => "zhì", // U+5FD7
    '忘' => "wàng", // U+5FD8
    '快' => "kuài", // U+5FEB
    '念' => "niàn", // U+5FF5
    '怎' => "zěn", // U+600E
    '怒' => "nù", // U+6012
    '怕' => "pà", // U+6015
    '思' => "sī,sāi", // U+601D
    '恨' => "hèn", // U+6068
    '恩' => "ēn", // U+6069
    '息' => "xī", // U+606F
    '悲' => "bēi", // U+60B2
    '情' => "qíng", // U+60C5
    '想' => "xiǎng", // U+60F3
    '意' => "yì", // U+610F
    '感' => "gǎn", // U+611F
    '愿' => "yuàn", // U+613F
    '慢' => "màn", // U+6162
    '懂' => "dǒng", // U+61C2
    '成' => "chéng", // U+6210
    '我' => "wǒ", // U+6211
    '或' => "huò", // U+6216
    '战' => "zhàn", // U+6218
    '房' => "fáng", // U+623F
    '所' => "suǒ", // U+6240
    '手' => "shǒu", // U+624B
    '才' => "cái", // U+624D
    '打' => "dǎ,dá", // U+6253
    '找' => "zhǎo", // U+627E
    '技' => "jì", // U+6280
    '把' => "bǎ,bà", // U+628A
    '报' => "bào", // U+62A5
    '抬' => "tái", // U+62AC
    '拿' => "ná", // U+62FF
    '换' => "huàn", // U+6362
    '接' => "jiē", // U+63A5
    '放' => "fàng", // U+653E
    '政' => "zhèng", // U+653F
    '教' => "jiāo,jiào", // U+6559
    '数' => "shù,shǔ,shuò", // U+6570
    '文' => "wén", // U+6587
    '新' => "xīn", // U+65B0
    '方' => "fāng", // U+65B9
    '旅' => "lǚ", // U+65C5
    '无' => "wú", // U+65E0
    '既' => "jì", // U+65E2
    '日' => "rì", // U+65E5
    '旧' => "jiù", // U+65E7
    '早' => "zǎo", // U+65E9
    '时' => "shí", // U+65F6
    '昂' => "áng", // U+6602
    '明' => "míng", // U+660E
    '星' => "xīng", // U+661F
    '春' => "chūn", // U+6625
    '昨' => "zuó", // U+6628
    '是' => "shì", // U+662F
    '晚' => "wǎn", // U+665A
    '更' => "gèng,gēng", // U+66F4
    '最' => "zuì", // U+6700
    '月' => "yuè", // U+6708
    '有' => "yǒu,yòu", // U+6709
    '朋' => "péng", // U+670B
    '望' => "wàng", // U+671B
    '木' => "mù", // U+6728
    '未' => "wèi", // U+672A
    '术' => "shù,zhú", // U+672F
    '机' => "jī", // U+673A
    '村' => "cūn", // U+6751
    '来' => "lái", // U+6765
    '林' => "lín", // U+6797
    '果' => "guǒ", // U+679C
    '树' => "shù", // U+6811
    '校' => "xiào,jiào", // U+6821
    '样' => "yàng", // U+6837
    '根' => "gēn", // U+6839
    '桌' => "zhuō", // U+684C
    '桥' => "qiáo", // U+6865
    '梦' => "mèng", // U+68A6
    '森' => "sēn", // U+68EE
    '椅' => "yǐ", // U+6905
    '楼' => "lóu", // U+697C
    '欧' => "ōu", // U+6B27
    '欲' => "yù", // U+6B32
    '正' => "zhèng,zhēng", // U+6B63
    '此' => "cǐ", // U+6B64
    '武' => "wǔ", // U+6B66
    '母' => "mǔ", // U+6BCD
    '每' => "měi", // U+6BCF
    '毛' => "máo", // U+6BDB
    '民' => "mín", // U+6C11
    '气' => "qì", // U+6C14
    '水' => "shuǐ", // U+6C34
    '永' => "yǒng", // U+6C38
    '江' => "jiāng", // U+6C5F
    '河' => "hé", // U+6CB3
    '油' => "yóu", // U+6CB9
    '法' => "fǎ", // U+6CD5
    '海' => "hǎi", // U+6D77
    '清' => "qīng", // U+6E05
    '温' => "wēn", // U+6E29
    '港' => "gǎng", // U+6E2F
    '游' => "yóu", // U+6E38
    '湖' => "hú", // U+6E56
    '湾' => "wān", // U+6E7E
    '满' => "mǎn", // U+6EE1
    '火' => "huǒ", // U+706B
    '灯' => "dēng", // U+706F
    '灰' => "huī", // U+7070
    '热' => "rè", // U+70ED
    '然' => "rán", // U+7136
    '熊' => "xióng", // U+718A
    '爱' => "ài", // U+7231
    '父' => "fù", // U+7236
    '爸' => "bà", // U+7238
    '牙' => "yá", // U+7259
    '牛' => "niú", // U+725B
    '物' => "wù", // U+7269
    '狗' => "gǒu", // U+72D7
    '狼' => "láng", // U+72FC
    '猪' => "zhū", // U+732A
    '猫' => "māo,máo", // U+732B
    '率' => "lǜ,shuài", // U+7387
    '玉' => "yù", // U+7389
    '王' => "wáng,wàng", // U+738B
    '理' => "lǐ", // U+7406
    '生' => "shēng", // U+751F
    '用' => "yòng", // U+7528
    '田' => "tián", // U+7530
    '由' => "yóu", // U+7531
    '电' => "diàn", // U+7535
    '画' => "huà", // U+753B
    '界' => "jiè", // U+754C
    '略' => "lüè", // U+7565
    '白' => "bái", // U+767D
    '百' => "bǎi,bó", // U+767E
    '的' => "de,dí,dì", // U+7684
    '皮' => "pí", // U+76AE
    '盎' => "àng", // U+76CE
    '盐' => "yán", // U+76D0
    '省' => "shěng,xǐng", // U+7701
    '看' => "kàn,kān", // U+770B
    '真' => "zhēn", // U+771F
    '眼' => "yǎn", // U+773C
    '知' => "zhī,zhì", // U+77E5
    '短' => "duǎn", // U+77ED
    '石' => "shí,dàn", // U+77F3
    '秋' => "qiū", // U+79CB
    '种' => "zhǒng,zhòng", // U+79CD
    '科' => "kē", // U+79D1
    '秒' => "miǎo", // U+79D2
    '称' => "chēng,chèn", // U+79F0
    '空' => "kōng,kòng", // U+7A7A
    '窗' => "chuāng", // U+7A97
    '站' => "zhàn", // U+7AD9
    '笑' => "xiào", // U+7B11
    '笔' => "bǐ", // U+7B14
    '答' => "dá,dā", // U+7B54
    '算' => "suàn", // U+7B97
    '米' => "mǐ", // U+7C73
    '糖' => "táng", // U+7CD6
    '系' => "xì,jì", // U+7CFB
    '紫' => "zǐ", // U+7D2B
    '红' => "hóng,gōng", // U+7EA2
    '约' => "yuē,yāo", // U+7EA6
    '纸' => "zhǐ", // U+7EB8
    '给' => "gěi,jǐ", // U+7ED9
    '绿' => "lǜ,lù", // U+7EFF
    '网' => "wǎng", // U+7F51
    '羊' => "yáng,xiáng", // U+7F8A
    '美' => "měi", // U+7F8E
    '考' => "kǎo", // U+8003
    '而' => "ér", // U+800C
    '耳' => "ěr", // U+8033
    '肉' => "ròu", // U+8089
    '育' => "yù", // U+80B2
    '能' => "néng", // U+80FD
    '脚' => "jiǎo,jué", // U+811A
    '脸' => "liǎn", // U+8138
    '自' => "zì", // U+81EA
    '舌' => "shé", // U+820C
    '舞' => "wǔ", // U+821E
    '色' => "sè,shǎi", // U+8272
    '花' => "huā", // U+82B1
    '若' => "ruò,rě", // U+82E5
    '英' => "yīng", // U+82F1
    '茶' => "chá", // U+8336
    '草' => "cǎo", // U+8349
    '菜' => "cài", // U+83DC
    '蓝' => "lán", // U+84DD
    '虎' => "hǔ", // U+864E
    '虑' => "lǜ", // U+8651
    '虫' => "chóng", // U+866B
    '虽' => "suī", // U+867D
    '血' => "xuè,xiě", // U+8840
    '行' => "xíng,háng", // U+884C
    '街' => "jiē", // U+8857
    '衣' => "yī", // U+8863
    '被' => "bèi", // U+88AB
    '西' => "xī", // U+897F
    '要' => "yào,yāo", // U+8981
    '见' => "jiàn,xiàn", // U+89C1
    '言' => "yán", // U+8A00
    '让' => "ràng", // U+8BA9
    '记' => "jì", // U+8BB0
    '讲' => "jiǎng", // U+8BB2
    '论' => "lùn,lún", // U+8BBA
    '词' => "cí", // U+8BCD
    '试' => "shì", // U+8BD5
    '话' => "huà", // U+8BDD
    '该' => "gāi", // U+8BE5
    '语' => "yǔ,yù", // U+8BED
    '误' => "wù", // U+8BEF
    '说' => "shuō,shuì", // U+8BF4
    '读' => "dú,dòu", // U+8BFB
    '课' => "kè", // U+8BFE
    '谁' => "shéi,shuí", // U+8C01
    '象' => "xiàng", // U+8C61
    '货' => "huò", // U+8D27
    '贵' => "guì", // U+8D35
    '走' => "zǒu", // U+8D70
    '越' => "yuè", // U+8D8A
    '跑' => "pǎo", // U+8DD1
    '路' => "lù", // U+8DEF
    '身' => "shēn", // U+8EAB
    '车' => "chē,jū", // U+8F66
    '边' => "biān", // U+8FB9
    '过' => "guò,guo", // U+8FC7
    '运' => "yùn", // U+8FD0
    '还' => "hái,huán", // U+8FD8
    '这' => "zhè", // U+8FD9
    '进' => "jìn", // U+8FDB
    '远' => "yuǎn", // U+8FDC
    '送' => "sòng", // U+9001
    '遇' => "yù", // U+9047
    '道' => "dào", // U+9053
    '那' => "nà,nèi", // U+90A3
    '都' => "dōu,dū", // U+90FD
    '酒' => "jiǔ", // U+9152
    '里' => "lǐ", // U+91CC
    '重' => "zhòng,chóng", // U+91CD
    '金' => "jīn", // U+91D1
    '钱' => "qián", // U+94B1
    '铁' => "tiě", // U+94C1
    '铜' => "tóng", // U+94DC
    '银' => "yín", // U+94F6
    '错' => "cuò", // U+9519
    '镇' => "zhèn", // U+9547
    '长' => "cháng,zhǎng", // U+957F
    '门' => "mén", // U+95E8
    '问' => "wèn", // U+95EE
    '间' => "jiān,jiàn", // U+95F4
    '闻' => "wén", // U+95FB
    '阿' => "ā,ē", // U+963F
    '院' => "yuàn", // U+9662
    '雨' => "yǔ,yù", // U+96E8
    '雪' => "xuě", // U+96EA
    '零' => "líng", // U+96F6
    '雷' => "léi", // U+96F7
    '雾' => "wù", // U+96FE
    '静' => "jìng", // U+9759
    '面' => "miàn", // U+9762
    '音' => "yīn", // U+97F3
    '须' => "xū", // U+987B
    '预' => "yù", // U+9884
    '题' => "tí", // U+9898
    '风' => "fēng,fěng", // U+98CE
    '飞' => "fēi", // U+98DE
    '饭' => "fàn", // U+996D
    '饿' => "è", // U+997F
    '马' => "mǎ", // U+9A6C
    '驴' => "lǘ", // U+9A74
    '骨' => "gǔ,gū", // U+9AA8
    '高' => "gāo", // U+9AD8
    '鱼' => "yú", // U+9C7C
    '鸟' => "niǎo,diǎo", // U+9E1F
    '鸡' => "jī", // U+9E21
    '鸭' => "yā", // U+9E2D
    '鹿' => "lù", // U+9E7F
    '黄' => "huáng", // U+9EC4
    '黑' => "hēi", // U+9ED1
    '鼻' => "bí", // U+9F3B
    '龙' => "lóng", // U+9F99
    '龟' => "guī,jūn,qiū", // U+9F9F
};
