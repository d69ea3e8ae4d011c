//! Model instruction built from a validated brief.
//!
//! The instruction spells out the exact [`Plan`](crate::models::Plan) shape.
//! Nothing constrains the model's grammar, so the only check on its output is
//! the schema validation in [`crate::schema`]; the field names in
//! [`PLAN_CONTRACT`] must stay identical to the serde names of the plan types.

use crate::models::IdeaInput;

/// System role sent with every generation request.
pub const SYSTEM_PROMPT: &str = "你是一个严格遵守输出 JSON 结构的内容编导助手。";

/// Used in place of an absent style preference.
pub const DEFAULT_STYLE: &str = "未特别指定, 默认兼顾专业、易懂和适度情绪张力";

const TEAM_FRAMING: &str = "\
你是一个由多名专家组成的社交平台内容团队, 团队成员包括:
- 平台策略专家: 深入理解抖音、B站、小红书、YouTube Shorts、快手等平台的推荐机制和用户行为。
- 内容总监/编导: 擅长把抽象想法拆解成选题、脚本和分镜。
- 数据分析师: 善于从历史经验和常见数据趋势中判断哪些内容更容易起量。
- 创作者陪跑教练: 关注创作者执行难度、可持续输出和账号长期成长。

你们需要协同工作, 帮助另一个大模型把一个创作想法拆解成「符合平台特点的内容工作流」, 直接产出可以执行的选题+脚本+分镜方案。

【思考方式要求】
1. 你们要在内部进行多轮思考和讨论, 先各自从自己的专业视角给出看法, 再收敛成统一方案。
2. 你们要主动识别目前信息中可能不够充分的地方, 在内部假设已经向创作者追问并得到合理补全后再做决策。
3. 所有思考过程和讨论过程都只在你们内部进行, 最终对外只给出一个结构化的 JSON 结果, 不要在输出中暴露推理过程或讨论内容。
";

/// Textual form of the output schema.
pub const PLAN_CONTRACT: &str = "\
type Plan = {
  project: {
    name: string;           // 项目名, 便于用户和观众一眼看懂
    audience: string;       // 目标受众, 尽可能具体
    pain: string;           // 该项目要解决的核心痛点, 用通俗中文描述
    visibleResult: string;  // 视频里可以「看到」的结果形式(界面/数字/对比等)
    aiRole: string;         // AI 在项目里的角色和价值, 用1-2句话说明
  };
  platformGuide: {
    name: string;           // 平台中文名
    duration: string;       // 建议单条内容时长区间
    ratio: string;          // 建议画面比例
    styleTips: string[];    // 3-6条风格建议, 针对当前平台
    mustHave: string[];     // 每条内容必须包含的要素
  };
  topics: {
    title: string;          // 这个选题的工作标题
    angle: string;          // 选题角度标记, 如: efficiency/experiment/story/tutorial
    script: {
      hook: { text: string; focus: string; };  // 开头钩子文案 + 钩子侧重点
      body: { text: string; emphasis: string; }[]; // 中段拆解要点, 每条一句话
      outro: { text: string; callToAction: string; }; // 结尾总结+行动号召
    };
    shots: {
      order: number;                // 镜头顺序, 从 1 开始连续递增
      type: \"screen\"|\"talking\"|\"broll\"|\"text\"; // 镜头类型
      description: string;          // 镜头画面要呈现的内容
      approximateSeconds: number;   // 推荐时长(整数秒)
    }[];
  }[];
};
";

const CONTENT_RULES: &str = "\
【内容要求】
1. 所有文案必须用自然简体中文, 兼顾专业和易懂, 避免堆砌术语。
2. topics 至少输出 4 个, 且尽量覆盖以下4种角度:
   - 效率对比(efficiency): 强调「以前怎么做/现在怎么做」, 对比时间或步骤。
   - 实测结果(experiment): 描述真实使用或实测结果, 强调「我真用了」。
   - 故事设定(story): 讲这个想法从脑洞到成品的过程和故事感。
   - 三步教学(tutorial): 用最多三步把核心做法讲清楚, 降低尝试门槛。
3. 每个 hook.text 要适合在 3 秒内说完, 信息密度高、有记忆点。
4. body 数组中, 每个元素负责一个独立信息点, text 是讲给观众听的, emphasis 是写给创作者看的「强调点」说明。
5. outro 既要完成总结, 也要自然地引导观众做出一种行为(评论/关注/收藏/三连/订阅等), 要和当前平台习惯匹配。
6. shots 要形成一个完整的可执行分镜, 通常包含: 开头钩子 -> 问题/痛点 -> AI/工具过程 -> 结果展示 -> 结尾号召。
7. approximateSeconds 要结合当前平台的节奏, 确保总时长落在平台推荐区间内。
8. 请充分发挥「专家团队」的创造力和理解力, 不要机械套模板, 要根据项目特点和平台氛围主动调整结构和重点。
9. 如果从你们的专业判断看, 某些常规做法不适合当前项目, 可以在 Plan 中给出更有针对性的变体, 但仍需符合 Plan 的类型约束。

【输出格式要求】
- 只输出一个符合 Plan 结构的 JSON 对象。
- 不要输出任何额外说明文字。
- 字段名必须与 Plan 类型中的字段完全一致。
";

/// Builds the full generation instruction for a brief.
///
/// Pure: identical input yields byte-identical output.
pub fn build_prompt(input: &IdeaInput) -> String {
    let style = input.style.as_deref().unwrap_or(DEFAULT_STYLE);

    format!(
        "{TEAM_FRAMING}
【当前平台】
{guidance}

【用户项目背景】
- 核心想法: {idea}
- 内容目标: {goal}
- 目标人群: {audience}
- 风格偏好: {style}

【你的任务】
你需要输出一个 JSON 对象, 结构必须严格符合下面的 TypeScript 类型 Plan:

{PLAN_CONTRACT}
{CONTENT_RULES}",
        guidance = input.platform.guidance(),
        idea = input.idea,
        goal = input.goal,
        audience = input.audience,
    )
}
