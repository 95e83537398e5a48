use super::Block;

const PLAN: &str = "For my topic I would like to remediate my first paper (the position paper) and specifically talk more about the impacts of the war. I’ll be able to implement this in an infographic because it’ll show the damages from the war and the expenses, along with how much budgeting from the U.S. government compared to other governments is used for aid to Ukraine. I chose this one because I thought there’s a ton of data involved with this one that is based on the economy. I’d like to focus more so on this data now rather than just my own and my family’s personal experiences.";

const FAMILY: &str = "Having family in Europe is worrisome enough, let alone in Ukraine and Poland. A lot of my family, like my cousin had to flee their homes because of the airstrikes and or the fear of the Russian invasion, and a fear for their safety. Meanwhile, my aunt in Poland who own s a bed and breakfast in Leba has opened her doors to displaced families and refugees. Turning a modest two story house into what is now a temporary home for those who’ve lost refugee, from their homes to even family members. The toll from stress has been immense. Even mentioning it brings anxiety and worry to all my family, wondering if it’ll be the last time I hear one of their voices. Uncertainty, fear, and helplessness are constant companions.";

pub(super) static BLOCKS: &[Block] = &[
    Block::Heading2("My Plan for an Infographic"),
    Block::Paragraph(PLAN),
    Block::Heading2("The Original Paper"),
    Block::Paragraph(
        "Here is the original paper that was the main reason why I created this infographic.",
    ),
    Block::Heading3("Supporting Ukraine: The Case for More Funding"),
    Block::Paragraph(PLAN),
    // repeated in the published paper
    Block::Paragraph(FAMILY),
    Block::Paragraph(FAMILY),
    Block::Paragraph(
        "The war also triggered a mental health crisis. The World Health Organization, 68% of Ukrainians report a decline in their health, with 46% suffering from mental health issues and 41% from mental disorders (UN News). These aren’t just statistics, they reflect an emotional and psychological trauma that millions now endure daily. The medical system is overwhelmed, especially when considering the over 2,500 attacks on healthcare facilities since the war began. By mid-2024, 100,000 amputations had been performed due to war injuries. Access to care is deeply unequal with 25% off Ukrainians report a reduced access to healthcare, and internally displaced people face even greater barriers.",
    ),
    Block::Paragraph(
        "The war’s impact extends far beyond Ukraine’s borders. With both the U.S. and the EU having poured billions into aid, ending debates about national priorities. But this isn’t just about charity, it also is about global stability. The war has contributed to global inflation, energy crises throughout the EU, and food shortages, affecting millions worldwide. These ripple effects show that war is not just a regional conflict, it’s a global issue that demands a global response. I also understand that not everyone agrees with the continued funding of Ukraine’s efforts against Russia. Humanitarian aid is about preserving life and dignity and should be a bipartisan issue. It’s about standing up for democracy and against aggression. Supporting Ukraine is not just about helping a distant country. It upholds the United States’ values of global democracy, values that have been repeated through the 20th and 21st centuries.",
    ),
    Block::Paragraph(
        "The refugee crisis has created long-term challenges. According to the UNHCR around 65% of Ukrainian refugees and 72% of internally displaced people still express a desire to return home, but many are uncertain due to the ongoing war. Some 59% of refugees say they might be forced to return even if it’s not their preferred choice, due to challenges in host countries like job scarcity and legal status (UNHCR, “Ukraine Emergency: Three Years On”). This shows that the crisis is not only about immediate survival but also about long term recovery and integration. The war has also devasted Ukraine’s infrastructure. Hundreds of schools and hospitals have been damaged or destroyed, significantly impacting people’s rights to education and health. In frontline areas, healthcare access is severely poor. In Kherson, 43% of adults report being unable to access care, followed by 24% in Kharkiv and 18% in Zaporizhzhia (UN News). These are regions where my own family once lived or still have ties. The thought that they or others like them might be denied basic medical care is awful.",
    ),
    Block::Paragraph(
        "Despite the insane amount of destruction, the resilience of the Ukrainian people is inspiring. More than 27,500 homes have already been repaired by humanitarian organizations like the UNHCR. It requires sustained funding, with the UNHCR appealing for nearly $1 billion in 2025 to continue supporting displaced people inside Ukraine and in neighboring countries (UN News). I believe that without continued support from the United States, Ukraine’s resistance would suffer, and the consequences would cause a rippling effect across the world. As someone with family directly affected by the war, I believe we should not turn away, but continue to stand, for the sake of global peace, democracy, and human dignity.",
    ),
];
